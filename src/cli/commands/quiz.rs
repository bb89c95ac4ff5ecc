use crate::cli::parser::Commands;
use crate::core::quiz::{MAX_ANSWER, MIN_ANSWER, QUESTIONS, QuizLogic};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Quiz { answers } = cmd {
        let answers = match answers {
            Some(raw) => QuizLogic::parse_answers(raw)?,
            None => ask_all(&mut io::stdin().lock())?,
        };

        let result = QuizLogic::score(&answers)?;

        header("Quiz result");
        println!("Average agreement: {:.1} / {}", result.average, MAX_ANSWER);
        println!("Profile: {}", result.verdict);
    }
    Ok(())
}

/// Prompt every question, re-asking on invalid input until EOF.
fn ask_all<R: BufRead>(input: &mut R) -> AppResult<Vec<u8>> {
    println!(
        "Rate each statement from {} (strongly disagree) to {} (strongly agree).\n",
        MIN_ANSWER, MAX_ANSWER
    );

    let mut answers = Vec::with_capacity(QUESTIONS.len());
    for (i, q) in QUESTIONS.iter().enumerate() {
        loop {
            print!("{}. {} > ", i + 1, q);
            io::stdout().flush().ok();

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF: let scoring report the missing answers
                return Ok(answers);
            }
            match QuizLogic::parse_answer(&line) {
                Ok(v) => {
                    answers.push(v);
                    break;
                }
                Err(e) => warning(e),
            }
        }
    }
    Ok(answers)
}
