//! System prompts and request assembly.

use crate::{ChatMessage, GenerationParams, GenerationRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Lenient,
    /// Used on the retry; demands bare JSON.
    Strict,
}

const BASE_PROMPT: &str = "You are an AI assistant for grievance redressal and incident reporting.\n\
Given a complaint description, classify it.\n\n\
Respond ONLY in valid JSON.\n\
Do NOT add explanations.\n\n\
JSON format:\n\
{\n  \"categories\": [string],\n  \"severity\": \"Critical\" | \"High\" | \"Normal\"\n}\n\n";

const STRICT_SUFFIX: &str =
    "CRITICAL: Output MUST be valid JSON only. No preamble, no markdown, no text before or after.\n\n";

const CLOSING: &str = "Now output the JSON:";

pub fn system_prompt(mode: PromptMode) -> String {
    let mut prompt = String::from(BASE_PROMPT);
    if mode == PromptMode::Strict {
        prompt.push_str(STRICT_SUFFIX);
    }
    prompt.push_str(CLOSING);
    prompt
}

pub fn build_request(complaint: &str, mode: PromptMode, params: &GenerationParams) -> GenerationRequest {
    GenerationRequest {
        messages: vec![ChatMessage::system(system_prompt(mode)), ChatMessage::user(complaint)],
        params: params.clone(),
    }
}
