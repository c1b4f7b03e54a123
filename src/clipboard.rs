//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Put `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Some backends only publish the selection once it has been read back
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }

    debug!("copied {} chars to clipboard", text.len());
    Ok(())
}
