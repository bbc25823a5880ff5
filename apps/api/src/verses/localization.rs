use serde::Serialize;

use crate::verses::models::Language;

/// UI strings the front end needs per language.
#[derive(Debug, Clone, Serialize)]
pub struct UiStrings {
    pub language: Language,
    pub language_name: &'static str,
    pub tagline: &'static str,
    pub results_heading: &'static str,
}

pub fn ui_strings(language: Language) -> UiStrings {
    match language {
        Language::En => UiStrings {
            language,
            language_name: "English",
            tagline: "We provide tailored advice straight from God's word for any situation you're facing",
            results_heading: "Here are your 21 Bible Verses that sympathise with your situation and provide you guidance",
        },
        Language::Es => UiStrings {
            language,
            language_name: "Español",
            tagline: "Proporcionamos consejos personalizados directamente de la palabra de Dios para cualquier situación que enfrentes",
            results_heading: "Aquí están tus 21 versículos bíblicos que se identifican con tu situación y te brindan orientación",
        },
        Language::Fr => UiStrings {
            language,
            language_name: "Français",
            tagline: "Nous fournissons des conseils personnalisés directement de la parole de Dieu pour toute situation que vous rencontrez",
            results_heading: "Voici vos 21 versets bibliques qui compatissent à votre situation et vous guident",
        },
    }
}
