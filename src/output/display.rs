//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, format_letters, guess_tiles, guesses_label};
use crate::commands::{AnalysisResult, BenchmarkResult, FrequencyReport, SuggestResult};
use crate::solver::{HistoryEntry, Solution, SolverConfig};
use colored::Colorize;

/// Remaining words are listed in full up to this many
const LIST_LIMIT: usize = 40;

fn banner(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the configuration line for a solve
pub fn print_config(config: &SolverConfig) {
    let prefix = config
        .prefix()
        .map_or_else(|| "none".to_string(), |p| char::from(p.to_ascii_uppercase()).to_string());
    println!(
        "   Dictionary: {}   Length: {}   Prefix: {}",
        config.dictionary_id().bright_white(),
        config.word_length().to_string().bright_white(),
        prefix.bright_white()
    );
}

/// Print the guesses played so far as colored tiles
pub fn print_history(history: &[HistoryEntry]) {
    for (i, entry) in history.iter().enumerate() {
        println!(
            "    {}. {}  {}",
            (i + 1).to_string().bright_black(),
            guess_tiles(entry.guess(), entry.pattern()),
            entry.pattern().to_emoji()
        );
    }
}

/// Print recommendations, remaining words, variable positions and fillers
pub fn print_solution(solution: &Solution) {
    if solution.is_exhausted() {
        println!(
            "\n{}",
            "❌ No words match this feedback. Check the colors entered.".red().bold()
        );
        return;
    }

    println!("\n📊 {}", "Recommendations:".bright_cyan().bold());
    let top = solution.recommendations.first().map_or(0.0, |r| r.score);
    for (i, rec) in solution.recommendations.iter().enumerate() {
        println!(
            "   {}. {}  [{}] {:.0}",
            i + 1,
            rec.word.to_uppercase().bright_yellow().bold(),
            create_progress_bar(rec.score, top, 20).green(),
            rec.score
        );
    }

    println!(
        "\n📖 {} {}",
        "Remaining words:".bright_cyan().bold(),
        solution.remaining_count.to_string().bright_white().bold()
    );
    if solution.remaining_count <= LIST_LIMIT {
        for row in format_columns(&solution.remaining_words, 8, 8) {
            println!("   {row}");
        }
    } else {
        let preview: Vec<String> = solution.remaining_words.iter().take(LIST_LIMIT).cloned().collect();
        for row in format_columns(&preview, 8, 8) {
            println!("   {row}");
        }
        println!("   {}", format!("… and {} more", solution.remaining_count - LIST_LIMIT).bright_black());
    }

    if !solution.variable_positions.is_empty() {
        println!("\n🔀 {}", "Undecided positions:".bright_cyan().bold());
        for position in solution.variable_positions.positions() {
            if let Some(letters) = solution.variable_positions.letters_at(position) {
                println!(
                    "   {}: {}",
                    (position + 1).to_string().bright_white(),
                    format_letters(letters.iter().copied())
                );
            }
        }
    }

    if !solution.filler_suggestions.is_empty() {
        println!("\n🧪 {}", "Filler words:".bright_cyan().bold());
        println!(
            "   {}",
            solution
                .filler_suggestions
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
                .bright_magenta()
        );
    }
}

/// Print the result of a suggest run
pub fn print_suggest_result(result: &SuggestResult) {
    banner("SUGGESTIONS", None);
    print_config(&result.config);

    if !result.history.is_empty() {
        println!("\n🎯 {}", "Guesses:".bright_cyan().bold());
        print_history(&result.history);
        let trail = result
            .trail
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" → ");
        println!("   Candidates: {trail}");
    }

    print_solution(&result.solution);
    println!();
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    banner("LETTER ANALYSIS:", Some(&result.word));

    println!("\n📊 Against {} candidate words:", result.total_candidates);
    println!(
        "   Score:       {}",
        format!("{:.0}", result.score).bright_yellow().bold()
    );
    match result.rank {
        Some(rank) => println!("   Rank:        #{rank}"),
        None => println!("   Rank:        {}", "not a candidate".bright_black()),
    }
    if !result.in_dictionary {
        println!("   {}", "Not in the dictionary".yellow());
    }

    println!("\n🔤 {}", "Letters:".bright_cyan().bold());
    let max = result.total_candidates as f64;
    for &(letter, count) in &result.letters {
        println!(
            "   {}  [{}] {count:5}",
            char::from(letter.to_ascii_uppercase()),
            create_progress_bar(count as f64, max, 30).green()
        );
    }
}

/// Print the letter frequency table
pub fn print_frequency_report(report: &FrequencyReport) {
    banner("LETTER FREQUENCY", None);
    println!("\n   Over {} words", report.word_count);
    if let Some(prefix) = report.prefix {
        println!(
            "   First letter {} excluded",
            char::from(prefix.to_ascii_uppercase())
        );
    }
    println!();

    let top = report.letters.first().map_or(0.0, |&(_, pct)| pct);
    for &(letter, pct) in &report.letters {
        println!(
            "   {}  [{}] {pct:5.2}%",
            char::from(letter.to_ascii_uppercase()),
            create_progress_bar(pct, top, 30).green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS", None);

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result.distribution.iter().map(|(&k, &v)| (k, v)).collect();
    counts.sort_unstable();
    for (guess_count, count) in counts {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failed.is_empty() {
        println!(
            "\n❌ {} {}",
            format!("Unsolved ({}):", result.failed.len()).red().bold(),
            result
                .failed
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

/// Print the win banner for an interactive game
pub fn print_win(history: &[HistoryEntry]) {
    let turns = history.len();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    🎉  S O L V E D !  🎉    ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        guesses_label(turns)
    );
    println!("\n  Guess history:");
    print_history(history);
    println!("\n{}", "═".repeat(60).bright_cyan());
}
