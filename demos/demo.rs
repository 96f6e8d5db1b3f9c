//! Walk through the curriculum end to end.
//!
//! Run with: `cargo run --example demo`
//!
//! Set `LOG_LEVEL=debug` to watch resolution and generation events, and
//! `MATH_DRILL_CONFIG=path/to/settings.toml` to override engine settings.
//!
//! The demo shows:
//!
//! 1. **One problem per level**, fixed seeds so the output is reproducible.
//! 2. **Hint tiers** for a single problem, including the worked example.
//! 3. **A problem set** for a review worksheet, sorted by difficulty.
//! 4. **Concept gating** and the seen-concepts ledger.
//! 5. **Client payload and answer checking**.

use math_drill_gen::{
    assemble_problem_set, client_adapter, curriculum_engine::ledger::pending_introductions,
    curriculum_engine::sequencer::available_concepts, curriculum_engine::InMemoryLedger,
    curriculum_engine::SeenConceptsLedger,
    generate_problem_with, is_concept_available, load_settings_from_env, telemetry, Concept,
    CurriculumPosition, EngineSettings, Level, Problem, ProblemRequest, ProblemSetRequest,
};

/// Pretty-print one problem: position, subtype, question, answer, difficulty.
fn print_problem(p: &Problem) {
    let missing = p.missing_position.map(|m| format!("  missing: {m:?}")).unwrap_or_default();
    println!(
        "  {:<16} {:<38} {:<28} = {:<14} d{:<2} {}{}",
        p.id,
        p.subtype.label(),
        p.question,
        p.correct_answer.to_string(),
        p.difficulty,
        p.display_format,
        missing,
    );
    if p.degraded {
        println!("                   (degraded: constraint not met within the attempt cap)");
    }
}

fn print_hints(p: &Problem) {
    let h = &p.hints;
    println!("  Q: {}", p.question);
    println!("  micro    ({}s): {}", h.micro.duration_secs, h.micro.text);
    println!(
        "  visual   ({}s): {}  [{}]",
        h.visual.duration_secs,
        h.visual.text,
        h.visual.animation_id.as_deref().unwrap_or("-")
    );
    println!(
        "  teaching ({}s, min {}s): {}",
        h.teaching.duration_secs,
        h.teaching.min_view_secs.unwrap_or(0),
        h.teaching.text
    );
    if let Some(example) = &h.teaching.example {
        for step in &example.steps {
            println!("      {step}");
        }
    }
}

fn main() {
    telemetry::init_tracing();
    let settings: EngineSettings = load_settings_from_env();

    // ── One problem per level ────────────────────────────────────────────────
    println!();
    println!("══ One problem per level (worksheet 50) ══");
    println!();
    for (i, level) in Level::ALL.into_iter().enumerate() {
        match generate_problem_with(&ProblemRequest::seeded(level, 50, 1000 + i as u64), &settings) {
            Ok(p) => print_problem(&p),
            Err(e) => println!("  {level}: {e}"),
        }
    }

    // ── Hint tiers ───────────────────────────────────────────────────────────
    println!();
    println!("══ Hints for C worksheet 12 ══");
    println!();
    if let Ok(p) = generate_problem_with(&ProblemRequest::seeded(Level::C, 12, 42), &settings) {
        print_hints(&p);
    }

    // ── Problem set ──────────────────────────────────────────────────────────
    // B 190 is the mixed addition and subtraction review phase.
    println!();
    println!("══ Problem set: B worksheet 190 ══");
    println!();
    match assemble_problem_set(ProblemSetRequest::new(Level::B, 190).with_seed(7), &settings) {
        Ok(set) => {
            println!("  operations: {:?}  degraded: {}", set.operations, set.degraded_count);
            for p in &set.problems {
                print_problem(p);
            }
        }
        Err(e) => println!("  {e}"),
    }

    // ── Concept gating ───────────────────────────────────────────────────────
    println!();
    println!("══ Concept gating ══");
    println!();
    for (level, ws) in [(Level::D, 200), (Level::E, 1)] {
        println!(
            "  fraction_addition at {level}{ws}: {}",
            is_concept_available(Concept::FractionAddition, level, ws)
        );
    }
    println!("  concepts available at E1: {}", available_concepts(Level::E, 1).len());
    let mut ledger = InMemoryLedger::default();
    let position = CurriculumPosition::new(Level::E, 1);
    println!("  pending for learner-1 at {position}: {:?}", pending_introductions(&ledger, "learner-1", position));
    ledger.mark_seen("learner-1", Concept::FractionAddition);
    println!("  after marking seen: {:?}", pending_introductions(&ledger, "learner-1", position));

    // ── Client payload ───────────────────────────────────────────────────────
    println!();
    println!("══ Client payload and answer check ══");
    println!();
    if let Ok(p) = generate_problem_with(&ProblemRequest::seeded(Level::C, 170, 3), &settings) {
        let payload = client_adapter::to_client_payload(&p);
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("  {e}"),
        }
        let guess = p.correct_answer.to_string();
        let check = client_adapter::check_answer(&p, &guess);
        println!("  answer {guess:?} correct: {}", check.is_correct);
        let check = client_adapter::check_answer(&p, "0");
        println!("  answer \"0\" correct: {} (expected {})", check.is_correct, check.expected);
    }
}
