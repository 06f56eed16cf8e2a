use bardgen_core::model::generation_input::{FallbackPolicy, GenerationInput};
use bardgen_core::model::generator::Generator;
use bardgen_core::model::ngram_model::NGramModel;

/// A handful of lines from Hamlet, standing in for the external corpus
/// source. Corpus acquisition and document parsing live outside this
/// library; all it needs is plain-text sentences.
const CORPUS: &[&str] = &[
    "To be, or not to be, that is the question.",
    "Whether tis nobler in the mind to suffer the slings and arrows of outrageous fortune.",
    "Or to take arms against a sea of troubles, and by opposing end them.",
    "To die, to sleep, no more.",
    "And by a sleep to say we end the heartache and the thousand natural shocks that flesh is heir to.",
    "To sleep, perchance to dream, ay, there is the rub.",
    "For in that sleep of death what dreams may come.",
    "The lady doth protest too much, methinks.",
    "Though this be madness, yet there is method in it.",
    "Brevity is the soul of wit.",
    "There are more things in heaven and earth, Horatio, than are dreamt of in your philosophy.",
    "Something is rotten in the state of Denmark.",
    "The rest is silence.",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Generation settings shared by all three model orders.
    // A fixed seed makes every run print the same output; drop it for
    // fresh text on each run.
    let mut input = GenerationInput::default();
    input.max_words = 25;
    input.num_samples = 3;
    input.seed = Some(1601);

    // Train bigram, trigram and quadgram models from the same corpus
    for n in 2..=4 {
        let model = NGramModel::from_sentences(n, CORPUS)?;
        let generator = Generator::new(model);

        println!("--- {}-gram ---", n);

        // Free text from a frequent opening, re-seeding the window from a
        // random known prefix whenever the chain runs into unseen ground
        let mut rng = input.rng();
        if let Some(start) = generator.pick_frequent_start(50, &mut rng) {
            let text = generator.generate_text(&start, 50, FallbackPolicy::RandomPrefix, &mut rng)?;
            println!("Text: {}", text);
        }

        // Well-formed sentences seeded from natural sentence openings
        for (i, sentence) in generator.generate(&input)?.iter().enumerate() {
            println!("Sentence {}: {}", i + 1, sentence);
        }

        println!();
    }

    Ok(())
}
