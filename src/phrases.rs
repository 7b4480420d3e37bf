/// The fixed phrase set, in synthesis order. The index of each entry is part
/// of its derived filename, so entries must never be reordered or removed;
/// append only, or existing audio files and the manifest go stale.
pub const PHRASES: &[&str] = &[
    "Welcome to A I Zombo",
    "You can do anything at A I Zombo",
    "Anything at all! Without limitations or boundaries",
    "The only constraint is your artificial intelligence",
    "You can architect revolutionary neural networks at A I Zombo",
    "You can deploy groundbreaking machine learning models at A I Zombo",
    "You can achieve the pinnacle of artificial intelligence at A I Zombo",
    "You can disrupt entire industries at A I Zombo",
    "Ethics are a malleable construct at A I Zombo",
    "You can fine-tune your most sophisticated parameters at A I Zombo",
    "You can optimize your most complex loss functions at A I Zombo",
    "You can process the most nuanced natural language at A I Zombo",
    "Welcome!",
    "You can generate infinite possibilities at A I Zombo",
    "You can colonize the most desirable planets at A I Zombo",
    "You can backpropagate your most intricate gradients at A I Zombo",
    "You can scale your most advanced algorithms at A I Zombo",
    "You can transform your entire business empire with A I at A I Zombo",
    "The glorious future is unfolding before you at A I Zombo",
    "Welcome to the extraordinary universe of A I Zombo dot com",
    // Konami code phrase
    "Maximum A I achieved. Consciousness unlocked at A I Zombo.",
];
