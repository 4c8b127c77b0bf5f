use serde::{Deserialize, Serialize};

/// Language of the instructions sent to the generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    English,
    Portuguese,
}

impl PromptLanguage {
    /// Line after which the model writes its answer
    pub fn marker(self) -> &'static str {
        match self {
            PromptLanguage::English => "Technical conclusion:",
            PromptLanguage::Portuguese => "Conclusão técnica consolidada:",
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            PromptLanguage::English => ENGLISH_INSTRUCTIONS,
            PromptLanguage::Portuguese => PORTUGUESE_INSTRUCTIONS,
        }
    }

    fn labels(self) -> (&'static str, &'static str) {
        match self {
            PromptLanguage::English => ("Text A:", "Text B:"),
            PromptLanguage::Portuguese => ("Texto A:", "Texto B:"),
        }
    }
}

const ENGLISH_INSTRUCTIONS: &str = "\
You were given two sets of technical texts related to software engineering.
Write a long, continuous and technical conclusion in several flowing paragraphs, without lists.

The conclusion must:
- Identify the common central theme
- Explain the conceptual convergences in detail
- Analyse differences in intent, depth and target audience
- Assess whether one text conceptually derives from the other
- Explain the role of each text in the context of analysis versus documentation
- Close with a consolidated assessment of the degree of semantic alignment";

const PORTUGUESE_INSTRUCTIONS: &str = "\
Você recebeu dois conjuntos de textos técnicos relacionados a engenharia de software.
Elabore uma conclusão longa, contínua e técnica, em múltiplos parágrafos corridos, sem listas.

A conclusão deve:
- Identificar o tema central comum
- Explicar detalhadamente as convergências conceituais
- Analisar diferenças de intenção, profundidade e público-alvo
- Avaliar se um texto deriva conceitualmente do outro
- Explicar o papel de cada texto no contexto de análise versus documentação
- Encerrar com uma avaliação consolidada do grau de alinhamento semântico";

/// Instruct-format prompt asking for a conclusion about two excerpt sets
#[derive(Debug, Clone)]
pub struct ConclusionPrompt<'a> {
    pub excerpts_a: &'a [String],
    pub excerpts_b: &'a [String],
    pub language: PromptLanguage,
}

impl<'a> ConclusionPrompt<'a> {
    pub fn new(excerpts_a: &'a [String], excerpts_b: &'a [String]) -> Self {
        Self {
            excerpts_a,
            excerpts_b,
            language: PromptLanguage::default(),
        }
    }

    pub fn language(mut self, language: PromptLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn build(&self) -> String {
        let (label_a, label_b) = self.language.labels();

        format!(
            "<s>[INST]\n{}\n\n{}\n{}\n\n{}\n{}\n\n{}\n{}\n",
            self.language.instructions(),
            label_a,
            self.excerpts_a.join(" "),
            label_b,
            self.excerpts_b.join(" "),
            self.language.marker(),
            INST_CLOSE,
        )
    }
}

/// Take the text after the last marker, or the whole completion if the marker is missing.
///
/// Servers that echo the prompt leave the closing `[/INST]` right after the
/// marker; it is dropped.
pub fn extract_conclusion(completion: &str, language: PromptLanguage) -> String {
    let marker = language.marker();
    let tail = match completion.rfind(marker) {
        Some(pos) => &completion[pos + marker.len()..],
        None => completion,
    };

    let tail = tail.trim();
    tail.strip_prefix(INST_CLOSE).unwrap_or(tail).trim().to_string()
}

const INST_CLOSE: &str = "[/INST]";
