//! Localized reply material.
//!
//! Each supported language carries the instruction given to the generative
//! API and the pieces of the fixed fallback reply. Unsupported codes resolve
//! to English, then Romanian.

/// Reply strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    /// System instruction for the generative API.
    pub instruction: &'static str,
    /// Task description; `{name}` and `{message}` are substituted.
    pub task: &'static str,
    /// Greeting with a `{name}` placeholder.
    pub greeting_named: &'static str,
    /// Greeting used when the guest name is unknown.
    pub greeting: &'static str,
    pub thanks: &'static str,
    /// Contact line with a `{phone}` placeholder.
    pub contact: &'static str,
}

const LOCALES: &[Locale] = &[
    Locale {
        code: "ro",
        instruction: "Ești recepționerul unui hotel. Răspunde politicos, în limba română, în cel mult trei propoziții.",
        task: "Oaspetele {name} a scris: \"{message}\". Răspunde scurt și prietenos.",
        greeting_named: "Bună ziua, {name}!",
        greeting: "Bună ziua!",
        thanks: "Vă mulțumim pentru mesaj.",
        contact: "Pentru orice întrebare ne puteți suna la {phone}.",
    },
    Locale {
        code: "en",
        instruction: "You are a hotel receptionist. Reply politely in English in at most three sentences.",
        task: "The guest {name} wrote: \"{message}\". Reply briefly and warmly.",
        greeting_named: "Hello {name}!",
        greeting: "Hello!",
        thanks: "Thank you for your message.",
        contact: "For any questions, please call us at {phone}.",
    },
    Locale {
        code: "de",
        instruction: "Sie sind Rezeptionist eines Hotels. Antworten Sie höflich auf Deutsch in höchstens drei Sätzen.",
        task: "Der Gast {name} schrieb: \"{message}\". Antworten Sie kurz und freundlich.",
        greeting_named: "Hallo {name}!",
        greeting: "Hallo!",
        thanks: "Vielen Dank für Ihre Nachricht.",
        contact: "Bei Fragen erreichen Sie uns unter {phone}.",
    },
    Locale {
        code: "fr",
        instruction: "Vous êtes réceptionniste d'hôtel. Répondez poliment en français en trois phrases au maximum.",
        task: "Le client {name} a écrit : \"{message}\". Répondez brièvement et chaleureusement.",
        greeting_named: "Bonjour {name} !",
        greeting: "Bonjour !",
        thanks: "Merci pour votre message.",
        contact: "Pour toute question, appelez-nous au {phone}.",
    },
    Locale {
        code: "es",
        instruction: "Eres recepcionista de un hotel. Responde con amabilidad en español en un máximo de tres frases.",
        task: "El huésped {name} escribió: \"{message}\". Responde de forma breve y cordial.",
        greeting_named: "¡Hola {name}!",
        greeting: "¡Hola!",
        thanks: "Gracias por su mensaje.",
        contact: "Para cualquier pregunta, llámenos al {phone}.",
    },
    Locale {
        code: "it",
        instruction: "Sei il receptionist di un hotel. Rispondi gentilmente in italiano in massimo tre frasi.",
        task: "L'ospite {name} ha scritto: \"{message}\". Rispondi in modo breve e cordiale.",
        greeting_named: "Buongiorno {name}!",
        greeting: "Buongiorno!",
        thanks: "Grazie per il suo messaggio.",
        contact: "Per qualsiasi domanda può chiamarci al {phone}.",
    },
];

impl Locale {
    /// Look up the locale for a language code.
    pub fn for_code(code: &str) -> &'static Locale {
        LOCALES
            .iter()
            .find(|l| l.code == code)
            .or_else(|| LOCALES.iter().find(|l| l.code == "en"))
            .unwrap_or(&LOCALES[0])
    }

    /// Greeting addressed to `name`, or the anonymous greeting when blank.
    pub fn greet(&self, name: &str) -> String {
        let name = name.trim();
        if name.is_empty() {
            self.greeting.to_string()
        } else {
            self.greeting_named.replace("{name}", name)
        }
    }

    pub fn contact_line(&self, phone: &str) -> String {
        self.contact.replace("{phone}", phone)
    }

    /// Task description for the generative API.
    pub fn task_for(&self, message: &str, name: &str) -> String {
        let name = if name.trim().is_empty() { "-" } else { name.trim() };
        self.task.replace("{name}", name).replace("{message}", message)
    }

    /// The fixed reply: greeting, thanks, contact line.
    pub fn fallback_reply(&self, name: &str, phone: &str) -> String {
        format!("{} {} {}", self.greet(name), self.thanks, self.contact_line(phone))
    }
}
