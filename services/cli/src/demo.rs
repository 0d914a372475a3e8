use crate::commands::{closest_zones, render_report};
use crate::infra::{parse_version, InMemoryQuizStore};
use clap::Args;
use spectrum_quiz::error::AppError;
use spectrum_quiz::quiz::{Axis, QuestionBank, QuestionItem, QuizService, QuizSession, QuizVersion};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Question set to walk through (defaults to QUIZ_DEFAULT_VERSION)
    #[arg(long, value_parser = parse_version)]
    pub(crate) version: Option<QuizVersion>,
    /// Number of zones to list from the compatibility map (defaults to 5)
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

/// Agreement a scripted respondent gives to forward-keyed statements on each axis.
fn scripted_value(item: &QuestionItem) -> i64 {
    let forward = match item.axis {
        Axis::X => 4,
        Axis::Y => 5,
        Axis::Z => 2,
    };
    if item.reverse {
        6 - forward
    } else {
        forward
    }
}

pub(crate) fn run_demo(
    args: DemoArgs,
    default_version: QuizVersion,
    bank: Arc<QuestionBank>,
) -> Result<(), AppError> {
    let version = args.version.unwrap_or(default_version);
    let store = Arc::new(InMemoryQuizStore::default());
    let service = QuizService::new(bank, store);

    println!("Spectrum quiz demo ({version} question set)");

    let mut session = service.start(version)?;
    let total = session.question_set().len();
    let halfway = total / 2;

    answer_until(&service, &mut session, halfway)?;
    let progress = session.progress();
    println!(
        "  Paused at question {} of {} ({:.0}% answered)",
        progress.position,
        progress.total,
        progress.percent()
    );
    service.checkpoint(&session)?;
    drop(session);

    let mut session = service
        .resume()?
        .ok_or_else(|| AppError::Input("saved progress was not restored".to_string()))?;
    println!(
        "  Resumed with {} answers on question {}",
        session.answered(),
        session.progress().position
    );

    answer_until(&service, &mut session, total)?;

    // Revisit the previous statement and soften the answer before submitting.
    if session.back() {
        let item = session.current().clone();
        let softened = (scripted_value(&item) + 3) / 2;
        let value = service.answer(&mut session, item.id, softened)?;
        session.advance()?;
        println!("  Revised question {} to {} ({softened})", item.id, value.label());
    }

    let report = service.submit(&session)?;
    println!();
    render_report(&report);

    println!("\nClosest zones on the compatibility map");
    for zone in closest_zones(&report.normalized_scores)
        .iter()
        .take(args.top.unwrap_or(5))
    {
        println!(
            "  {:>3.0}% {} {} ({})",
            zone.score * 100.0,
            zone.glyph,
            zone.name,
            zone.band
        );
    }

    Ok(())
}

/// Answer from the current question onward until `target` questions are answered or the
/// last question is reached.
fn answer_until<S>(
    service: &QuizService<S>,
    session: &mut QuizSession,
    target: usize,
) -> Result<(), AppError>
where
    S: spectrum_quiz::quiz::QuizStore + 'static,
{
    while session.answered() < target {
        let item = session.current().clone();
        service.answer(session, item.id, scripted_value(&item))?;
        if !session.advance()? {
            break;
        }
    }
    Ok(())
}
