//! User-facing strings in the two supported languages.

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Español
    Es,
}

pub struct Text {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub settings: &'static str,
    pub length: &'static str,
    pub numbers: &'static str,
    pub symbols: &'static str,
    pub keys: [&'static str; 2],
    pub idle: &'static str,
    pub success: &'static str,
    pub your_password: &'static str,
    pub copy_hint: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub nothing_to_copy: &'static str,
    pub settings_saved: &'static str,
    pub settings_load_failed: &'static str,
    pub settings_save_failed: &'static str,
    pub length_prompt: &'static str,
    pub tips_title: &'static str,
    pub tips: [&'static str; 3],
}

const ENGLISH: Text = Text {
    title: "Easy Password Generator",
    subtitle: "Secure passwords that are easy to use, made with older adults in mind.",
    settings: "Generation settings",
    length: "Length",
    numbers: "Include numbers (0-9)",
    symbols: "Include symbols (!@#...)",
    keys: [
        "Enter) generate   \u{2190}/\u{2192}) length   e) type length   x) clear",
        "n) numbers   s) symbols   c) copy   l) idioma   q) quit",
    ],
    idle: "Press Enter to generate a password.",
    success: "Password generated successfully!",
    your_password: "Your password:",
    copy_hint: "To copy it press 'c', or select the text and use Ctrl+Shift+C (Cmd+C on Mac).",
    copied: "Copied to the clipboard.",
    copy_failed: "Could not copy to the clipboard:",
    nothing_to_copy: "Nothing to copy yet. Press Enter to generate a password first.",
    settings_saved: "Settings saved",
    settings_load_failed: "Failed to load settings:",
    settings_save_failed: "Failed to save settings:",
    length_prompt: "New length (8-20)",
    tips_title: "Tips:",
    tips: [
        "Use 8 to 20 characters for a balance of safety and ease.",
        "If you want something easier to remember, leave out the symbols.",
        "Keep your passwords private and do not share them.",
    ],
};

const SPANISH: Text = Text {
    title: "Generador de contrase\u{f1}as f\u{e1}cil",
    subtitle: "Contrase\u{f1}as seguras y f\u{e1}ciles de usar, pensadas para adultos mayores.",
    settings: "Ajustes de generaci\u{f3}n",
    length: "Longitud",
    numbers: "Incluir n\u{fa}meros (0-9)",
    symbols: "Incluir s\u{ed}mbolos (!@#...)",
    keys: [
        "Enter) generar   \u{2190}/\u{2192}) longitud   e) escribir longitud   x) borrar",
        "n) n\u{fa}meros   s) s\u{ed}mbolos   c) copiar   l) language   q) salir",
    ],
    idle: "Pulsa Enter para generar una contrase\u{f1}a.",
    success: "\u{a1}Contrase\u{f1}a generada con \u{e9}xito!",
    your_password: "Tu contrase\u{f1}a:",
    copy_hint: "Para copiarla pulsa 'c', o selecciona el texto y usa Ctrl+May\u{fa}s+C (Cmd+C en Mac).",
    copied: "Copiada al portapapeles.",
    copy_failed: "No se pudo copiar al portapapeles:",
    nothing_to_copy: "A\u{fa}n no hay nada que copiar. Pulsa Enter para generar una contrase\u{f1}a.",
    settings_saved: "Ajustes guardados",
    settings_load_failed: "No se pudieron cargar los ajustes:",
    settings_save_failed: "No se pudieron guardar los ajustes:",
    length_prompt: "Nueva longitud (8-20)",
    tips_title: "Consejos:",
    tips: [
        "Usa entre 8 y 20 caracteres para un equilibrio entre seguridad y facilidad.",
        "Si quieres algo m\u{e1}s f\u{e1}cil de recordar, evita los s\u{ed}mbolos.",
        "Mant\u{e9}n tus contrase\u{f1}as privadas y no las compartas.",
    ],
};

impl Language {
    pub fn text(self) -> &'static Text {
        match self {
            Language::En => &ENGLISH,
            Language::Es => &SPANISH,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Warning shown in the form for a rejected input or failed action.
    pub fn describe(self, err: &Error) -> String {
        match (self, err) {
            (Language::En, Error::NotANumber(input)) => {
                format!("'{input}' is not a number. Please enter a whole number.")
            }
            (Language::Es, Error::NotANumber(input)) => {
                format!("'{input}' no es un n\u{fa}mero. Escribe un n\u{fa}mero entero.")
            }
            (Language::En, Error::LengthOutOfRange { min, max, .. }) => {
                format!("The length must be between {min} and {max}.")
            }
            (Language::Es, Error::LengthOutOfRange { min, max, .. }) => {
                format!("La longitud debe estar entre {min} y {max}.")
            }
            (Language::En, Error::LengthTooSmall { required, .. }) => {
                format!("The length must be at least {required} for these options.")
            }
            (Language::Es, Error::LengthTooSmall { required, .. }) => {
                format!("La longitud debe ser al menos {required} con estas opciones.")
            }
            (Language::En, other) => format!("Something went wrong: {other}"),
            (Language::Es, other) => format!("Algo sali\u{f3} mal: {other}"),
        }
    }
}
