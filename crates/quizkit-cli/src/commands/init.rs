//! The `quizkit init` command.

use anyhow::Result;

use quizkit_core::config::SAMPLE_CONFIG;
use quizkit_core::sample::SAMPLE_QUIZ_TOML;

pub fn execute() -> Result<()> {
    // Create quizkit.toml
    if std::path::Path::new("quizkit.toml").exists() {
        println!("quizkit.toml already exists, skipping.");
    } else {
        std::fs::write("quizkit.toml", SAMPLE_CONFIG)?;
        println!("Created quizkit.toml");
    }

    // Create sample quiz
    std::fs::create_dir_all("quizzes")?;
    let sample_path = std::path::Path::new("quizzes/sample.toml");
    if sample_path.exists() {
        println!("quizzes/sample.toml already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_QUIZ_TOML)?;
        println!("Created quizzes/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizzes/sample.toml or add your own quiz files");
    println!("  2. Run: quizkit validate --quiz quizzes");
    println!("  3. Run: quizkit run");

    Ok(())
}
