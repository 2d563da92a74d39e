/// The models walked by a simulated run, in execution order.
pub const MODELS: [&str; 9] = [
    "albert-base-v2",
    "distilbert-base-uncased",
    "bert-base-uncased",
    "bert-large-uncased",
    "roberta-base",
    "roberta-large",
    "distilroberta-base",
    "openai-gpt",
    "gpt2",
];

/// `(number, model)` pairs, numbered from 1.
pub fn numbered() -> impl Iterator<Item = (usize, &'static str)> {
    MODELS.iter().copied().enumerate().map(|(i, m)| (i + 1, m))
}
