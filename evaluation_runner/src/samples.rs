
use anyhow::{Context, Result};
use lib::service::CommonService;


// One representative entry per emotion the classifier can produce.
pub const SAMPLE_ENTRIES: [(&str, &str); 7] = [
    ("sadness", "Everything feels heavy lately. I stare at my laptop for hours and nothing gets done. I feel like I'm letting everyone down."),
    ("joy", "My best friend surprised me with coffee today and we laughed for two hours straight. Some days the world feels kind again."),
    ("anger", "I'm so furious that my group members left everything to the last minute again. Why am I always the one fixing their mess?"),
    ("fear", "I keep waking up at 3am with my heart racing, terrified that I won't finish this degree or that I'll disappoint my family."),
    ("love", "My little sister sent me the silliest voice note and I cried from laughing. I'm so lucky to have these people in my life."),
    ("surprise", "I got an email saying I was shortlisted for the scholarship. I genuinely thought it was spam at first - still in shock!"),
    ("neutral", "Woke up, had coffee, attended lectures, did some reading. Nothing special, just a regular day."),
];


pub async fn run_samples() -> Result<()> {
    let service = CommonService::new();

    println!("{}", "=".repeat(90));
    for (name, text) in SAMPLE_ENTRIES {
        let prediction = service
            .classifier
            .classify(text)
            .await
            .with_context(|| format!("classification failed for the {} sample", name))?;
        let feedback = service
            .chat
            .generate_feedback(text, &prediction.label)
            .await
            .with_context(|| format!("feedback generation failed for the {} sample", name))?;

        println!("{}", name.to_uppercase());
        println!("Detected -> {} (confidence: {:.3})", prediction.label, prediction.score);
        println!("Entry: {}", text);
        println!("Feedback: {}", feedback);
        println!();
        println!("{}", "-".repeat(90));
    }

    Ok(())
}
