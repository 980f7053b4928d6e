use crate::form::ValidForm;
use crate::llm::Message;

const SYSTEM_PROMPT: &str = "Você é um redator de social media que escreve em PT-BR.
Gere exatamente 3 variações de legenda para Instagram, cada uma com:
1) TÍTULO curto na primeira linha (máx. ~6 palavras),
2) LEGENDA principal com no máximo 300 caracteres,
3) CTA (chamada para ação) direta,
4) 3 HASHTAGS (apenas 3, sem espaços entre palavras, relevantes ao tema).
Formato de saída obrigatória para cada variação:
TÍTULO: <título>
LEGENDA: <texto (<=300 chars)>
CTA: <texto>
HASHTAGS: #exemplo1 #exemplo2 #exemplo3
---
Nada além desse formato. Sem explicações adicionais.";

const EXTRA_INSTRUCTIONS: &str = "Instruções extras:
- Texto natural e humano, sem promessas médicas/jurídicas.
- Evite linguagem proibitiva de anúncios (ex.: garantias absolutas).
- Se objetivo for conversão, inclua CTA com ação clara (ex.: \"Chame no WhatsApp\", \"Agende hoje\").
- Use hashtags relevantes ao nicho, sempre 3 por variação.";

const NOTES_PLACEHOLDER: &str = "N/A";

#[derive(Clone, Debug, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl PromptPair {
    pub fn build(form: &ValidForm) -> Self {
        let notes = form.notes.as_deref().unwrap_or(NOTES_PLACEHOLDER);
        let user = format!(
            "Contexto do negócio:\n\
             - Tipo de negócio: {}\n\
             - Objetivo do post: {}\n\
             - Tom de voz: {}\n\
             - Observações: {}\n\
             \n\
             {}",
            form.business, form.goal, form.tone, notes, EXTRA_INSTRUCTIONS
        );
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }

    /// System message first, then the user message.
    pub fn messages(&self) -> Vec<Message> {
        vec![
            Message {
                role: "system".to_string(),
                content: self.system.clone(),
            },
            Message {
                role: "user".to_string(),
                content: self.user.clone(),
            },
        ]
    }
}
