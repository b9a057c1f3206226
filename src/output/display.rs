//! Display functions for game narration and command results

use super::formatters::{choice_line, choice_lines, create_progress_bar, letter_label, outcome_line};
use crate::commands::SimulationResult;
use crate::console::Event;
use crate::core::{Outcome, Seat};
use crate::game::Game;
use crate::players::PASS_SENTINEL;
use colored::Colorize;

/// Print one game event
pub fn print_event(event: &Event) {
    match event {
        Event::TossCall { name } => {
            println!(
                "\n{} flips the coin and {} makes a call (heads/tails)",
                "Bot".bright_cyan(),
                name.bright_yellow().bold()
            );
        }
        Event::TossResult { call, coin, first } => {
            let call = call.map_or_else(|| "no call".to_string(), |c| c.to_string());
            let first = match first {
                Seat::Human => "you sing first".green(),
                Seat::Bot => "Bot sings first".yellow(),
            };
            println!("Coin shows {} ({call}), {first}", coin.to_string().bold());
        }
        Event::Prompt {
            name,
            required,
            choices,
        } => {
            println!("\n{}", "─".repeat(60).cyan());
            match required {
                None => println!("{} please sing any song", name.bright_yellow().bold()),
                Some(_) => println!(
                    "{} please sing a song beginning with {}",
                    name.bright_yellow().bold(),
                    letter_label(*required).bright_green().bold()
                ),
            }
            for line in choice_lines(choices) {
                println!("{line}");
            }
            println!("{}", choice_line(PASS_SENTINEL, "To pass").bright_black());
        }
        Event::Sang { name, lyric } => {
            println!(
                "🎵 {} sings {}",
                name.bright_cyan().bold(),
                lyric.text().italic()
            );
        }
        Event::Passed { name, seat } => match seat {
            Seat::Human => println!("{}", format!("{name} passes, Bot gets a point").yellow()),
            Seat::Bot => println!("{}", format!("{name} passes, can sing any song").yellow()),
        },
        Event::WrongChoice(reason) => {
            println!("{} {}", "❌ Wrong choice, play again:".red(), reason);
        }
        Event::GameOver {
            human,
            bot,
            scoreboard,
        } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{human} score : {}", scoreboard.human.to_string().bold());
            println!("{bot} score : {}", scoreboard.bot.to_string().bold());
            let outcome = scoreboard.outcome();
            let line = outcome_line(human, bot, outcome);
            match outcome {
                Outcome::Tie => println!("{}", line.bright_yellow().bold()),
                Outcome::HumanWins => println!("{}", line.bright_green().bold()),
                Outcome::BotWins => println!("{}", line.red().bold()),
            }
            println!("{}", "═".repeat(60).bright_cyan());
        }
    }
}

/// Print both dealt inventories without starting the game
pub fn print_deal(game: &Game) {
    for seat in Seat::ALL {
        let participant = game.participant(seat);
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "{} ({} songs)",
            participant.name().bright_yellow().bold(),
            participant.inventory().len()
        );
        println!("{}", "─".repeat(60).cyan());
        for line in choice_lines(participant.inventory().as_slice()) {
            println!("{line}");
        }
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    let total = result.games.max(1) as f64;
    for (label, count) in [
        ("Bot wins", result.bot_wins),
        ("Naive wins", result.human_wins),
        ("Ties", result.ties),
    ] {
        let pct = count as f64 / total * 100.0;
        println!(
            "   {label:<12} {} {count:4} ({pct:5.1}%)",
            create_progress_bar(pct, 100.0, 30).green()
        );
    }

    println!("\n📈 {}", "Turns:".bright_cyan().bold());
    println!(
        "   Average turns:    {}",
        format!("{:.1}", result.average_turns())
            .bright_yellow()
            .bold()
    );
    println!("   Naive passes:     {}", result.human_passes);
    println!("   Bot passes:       {}", result.bot_passes);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let worst = result.worst_letters(5);
    if !worst.is_empty() {
        println!(
            "\n🪤 {}",
            "Letters that forced a pass:".bright_cyan().bold()
        );
        for (letter, count) in worst {
            println!("   {}: {count}", letter_label(Some(letter)).bright_yellow());
        }
    }
}
