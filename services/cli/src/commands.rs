use crate::infra::{parse_coordinate, parse_version, read_responses, JsonFileStore};
use clap::Args;
use spectrum_quiz::error::AppError;
use spectrum_quiz::quiz::{
    catalog, compatibility_breakdown, compatibility_map, Axis, AxisCategory, CompatibilityBand,
    Coordinate, CompatibilityZone, QuestionBank, QuizReport, QuizService, QuizSession, QuizStore, QuizVersion,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Question set the responses were collected against
    #[arg(long, value_parser = parse_version)]
    pub(crate) version: Option<QuizVersion>,
    /// Responses as a JSON array of {questionId, value} or a question_id,value CSV
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Do not store the result
    #[arg(long)]
    pub(crate) no_save: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ArchetypesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompatArgs {
    /// Seeker position as x,y,z on the -24..24 scale
    #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate)]
    pub(crate) user: Coordinate,
    /// Candidate position; without it every archetype zone is scored
    #[arg(long, allow_hyphen_values = true, value_parser = parse_coordinate)]
    pub(crate) candidate: Option<Coordinate>,
}

#[derive(Args, Debug)]
pub(crate) struct ResultsArgs {
    /// Question set whose stored result should be shown
    #[arg(long, value_parser = parse_version)]
    pub(crate) version: Option<QuizVersion>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score<S>(
    args: ScoreArgs,
    default_version: QuizVersion,
    service: &QuizService<S>,
) -> Result<(), AppError>
where
    S: QuizStore + 'static,
{
    let version = args.version.unwrap_or(default_version);
    let log = read_responses(&args.responses)?;

    let mut session = QuizSession::new(service.bank().set(version)?);
    for response in log.iter() {
        session.answer(response.question_id, i64::from(response.value.value()))?;
    }

    // A file is scored outside any live session, so saved progress stays put.
    let report = session.submit()?;
    if !args.no_save {
        service.save_report(&report)?;
    }

    print_report(&report, args.json)
}

pub(crate) fn run_archetypes(args: ArchetypesArgs) -> Result<(), AppError> {
    if args.json {
        let records: Vec<_> = catalog().iter().map(|archetype| archetype.record()).collect();
        return print_json(&records);
    }

    println!("Archetype catalog ({} entries)", catalog().len());
    for archetype in catalog() {
        let ranges = archetype.ranges();
        println!(
            "  {} {:<26} {:<22} x{} y{} z{}",
            archetype.glyph,
            archetype.name,
            archetype.key.to_string(),
            ranges.x,
            ranges.y,
            ranges.z
        );
    }
    Ok(())
}

pub(crate) fn run_compat(args: CompatArgs) -> Result<(), AppError> {
    let CompatArgs { user, candidate } = args;

    if let Some(candidate) = candidate {
        let breakdown = compatibility_breakdown(&user, &candidate);
        let band = CompatibilityBand::from_score(breakdown.overall);
        println!("Compatibility {:.0}% ({})", breakdown.overall * 100.0, band);
        println!(
            "  {}: {:.2}  {}: {:.2}  {}: {:.2}",
            Axis::X.title(),
            breakdown.x,
            Axis::Y.title(),
            breakdown.y,
            Axis::Z.title(),
            breakdown.z
        );
        return Ok(());
    }

    let zones = closest_zones(&user);

    println!(
        "Compatibility map for ({:.1}, {:.1}, {:.1})",
        user.x, user.y, user.z
    );
    for zone in zones {
        let marker = if zone.is_highlighted() { "*" } else { " " };
        println!(
            " {marker} {:>3.0}% {} {:<26} {}",
            zone.score * 100.0,
            zone.glyph,
            zone.name,
            zone.color
        );
    }
    Ok(())
}

pub(crate) fn run_results(
    args: ResultsArgs,
    default_version: QuizVersion,
    service: &QuizService<JsonFileStore>,
) -> Result<(), AppError> {
    let version = args.version.unwrap_or(default_version);
    match service.saved_report(version)? {
        Some(report) => print_report(&report, args.json),
        None => {
            println!("No saved result for the {version} question set.");
            Ok(())
        }
    }
}

/// Every archetype zone ordered by score, with ties going to the zone nearest `user`.
pub(crate) fn closest_zones(user: &Coordinate) -> Vec<CompatibilityZone> {
    let mut zones = compatibility_map(user);
    zones.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| distance(user, &a.position).total_cmp(&distance(user, &b.position)))
    });
    zones
}

fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    ((from.x - to.x).powi(2) + (from.y - to.y).powi(2) + (from.z - to.z).powi(2)).sqrt()
}

pub(crate) fn file_service(
    bank: Arc<QuestionBank>,
    store: JsonFileStore,
) -> QuizService<JsonFileStore> {
    QuizService::new(bank, Arc::new(store))
}

fn print_report(report: &QuizReport, json: bool) -> Result<(), AppError> {
    if json {
        print_json(report)
    } else {
        render_report(report);
        Ok(())
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Input(format!("unable to serialize output: {err}")))?;
    println!("{body}");
    Ok(())
}

pub(crate) fn render_report(report: &QuizReport) {
    println!(
        "{} {}  ({} question set)",
        report.archetype.glyph, report.archetype.name, report.version
    );
    println!("{}", report.subtitle());
    println!("{}", report.archetype.description);

    println!("\nScores");
    for axis in Axis::ALL {
        let normalized = *report.normalized_scores.get(axis);
        println!(
            "  {:<18} raw {:>4}  normalized {:>6.1}  {:<10} {}",
            axis.title(),
            report.raw_scores.get(axis),
            normalized,
            AxisCategory::from_score(normalized).tag(),
            report.interpretations.get(axis)
        );
        println!("  {:<18} {}", "", axis.description());
    }

    println!("\nCompatible archetypes");
    for record in &report.compatible_archetypes {
        println!("  {} {}", record.glyph, record.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_quiz::quiz::{ResponseLog, SessionSnapshot};
    use std::fs;

    fn temp_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "spectrum-quiz-{label}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("temp dir created");
        dir
    }

    #[test]
    fn scoring_a_file_keeps_saved_progress() {
        let dir = temp_dir("score");
        let store = JsonFileStore::new(dir.join("data"));
        store
            .save_progress(SessionSnapshot {
                version: QuizVersion::Middle,
                current_question: 3,
                responses: ResponseLog::new(),
                saved_at: chrono::Utc::now(),
            })
            .expect("progress saved");

        let responses = dir.join("answers.json");
        let body: Vec<String> = (1..=8)
            .map(|id| format!(r#"{{"questionId": {id}, "value": 3}}"#))
            .collect();
        fs::write(&responses, format!("[{}]", body.join(","))).expect("responses written");

        let bank = Arc::new(QuestionBank::embedded().expect("bundled question sets load"));
        let service = file_service(bank, store.clone());
        let args = ScoreArgs {
            version: Some(QuizVersion::Demo),
            responses,
            json: true,
            no_save: false,
        };
        run_score(args, QuizVersion::Middle, &service).expect("score succeeds");

        let progress = store
            .load_progress()
            .expect("load")
            .expect("progress still present");
        assert_eq!(progress.version, QuizVersion::Middle);
        assert_eq!(progress.current_question, 3);
        assert!(store.load_result(QuizVersion::Demo).expect("load").is_some());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn tied_zones_are_ordered_by_distance() {
        let user = Coordinate::new(20.0, 24.0, 20.0);
        let zones = closest_zones(&user);

        assert_eq!(zones.len(), 27);
        assert_eq!(zones[0].position, Coordinate::new(15.0, -15.0, 15.0));
        assert!((zones[0].score - zones[8].score).abs() < 1e-9);
        for pair in zones.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(distance(&user, &pair[0].position) <= distance(&user, &pair[1].position));
            }
        }
    }
}
