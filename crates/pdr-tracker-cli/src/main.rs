//! PDR Tracker CLI — `pdr` command.
//!
//! Records professional-development activities, links them as evidence to
//! competencies, checks level-up eligibility, and prints summaries and
//! reports. State lives in a single snapshot file under the data directory.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use pdr_tracker::progression::{self, assess_level_up, progress};
use pdr_tracker::record::{create_activity, create_competency, create_profile};
use pdr_tracker::report::{activity_report, competency_report};
use pdr_tracker::stats::{activity_stats, competency_stats};
use pdr_tracker::storage::{Snapshot, SnapshotStore};
use pdr_tracker::{
    Activity, ActivityDraft, ActivityId, ActivityPatch, ActivityStatus, ActivityType, Competency,
    CompetencyDraft, CompetencyId, CompetencyPatch, CompetencyStatus, ProfileDraft, Store,
    Timeframe, UserProfile,
};

// ── Directory helpers ─────────────────────────────────────────────────────────

/// Resolve the data directory: `--data-dir`, then `PDR_HOME`, then `~/.pdr`.
fn data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("PDR_HOME") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").map_err(|_| anyhow!("HOME not set; pass --data-dir"))?;
    Ok(PathBuf::from(home).join(".pdr"))
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Loaded state for one command invocation.
struct Session {
    storage: SnapshotStore,
    profile: Option<UserProfile>,
    store: Store,
}

impl Session {
    fn open(dir: PathBuf) -> Result<Self> {
        let storage = SnapshotStore::new(&dir)
            .with_context(|| format!("failed to open data directory {}", dir.display()))?;
        let snapshot = storage.load().context("failed to load records")?;
        let (profile, store) = snapshot.into_store();
        Ok(Self {
            storage,
            profile,
            store,
        })
    }

    fn save(self) -> Result<()> {
        let snapshot = Snapshot::from_parts(self.profile, self.store.into_snapshot());
        self.storage
            .save(&snapshot)
            .context("failed to save records")
    }
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to encode JSON")?
    );
    Ok(())
}

fn print_activity(a: &Activity, verbose: bool) {
    println!("  {} [{}] {}", a.id, a.status, a.title);
    println!("    Type:      {}", a.activity_type);
    println!("    Provider:  {}", a.provider);
    println!("    Completed: {}", a.date_completed);
    if verbose {
        println!("    Description: {}", a.description);
        if !a.documentation.is_empty() {
            println!("    Documentation: {}", a.documentation.join(", "));
        }
        if !a.competencies.is_empty() {
            let ids: Vec<String> = a.competencies.iter().map(|c| c.to_string()).collect();
            println!("    Competencies: {}", ids.join(", "));
        }
        if let Some(ref r) = a.reflection {
            println!("    Reflection: {r}");
        }
    }
}

fn print_competency(c: &Competency) {
    println!("  {} {} ({}, {})", c.id, c.name, c.level, c.status);
    println!(
        "    Evidence: {} item(s), progress {}%, level gauge {}%",
        c.evidence.len(),
        progress(c),
        c.level.ladder_percent()
    );
}

// ── Argument parsers ──────────────────────────────────────────────────────────

fn parse_activity_type(s: &str) -> Result<ActivityType> {
    ActivityType::from_tag(s).ok_or_else(|| {
        anyhow!("unknown activity type: '{s}'. Use: training, certification, project, education")
    })
}

fn parse_competency_status(s: &str) -> Result<CompetencyStatus> {
    CompetencyStatus::from_tag(s)
        .ok_or_else(|| anyhow!("unknown competency status: '{s}'. Use: in_progress, verified"))
}

fn parse_timeframe(s: &str) -> Result<Timeframe> {
    Timeframe::from_tag(s)
        .ok_or_else(|| anyhow!("unknown timeframe: '{s}'. Use: all, month, quarter, year"))
}

fn parse_date_arg(s: &str) -> Result<String> {
    pdr_tracker::time::parse_date(s)
        .map(pdr_tracker::time::format_date)
        .ok_or_else(|| anyhow!("invalid date '{s}', expected YYYY-MM-DD"))
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// PDR Tracker CLI — record professional development and track competencies.
#[derive(Parser, Debug)]
#[command(
    name = "pdr",
    about = "PDR Tracker CLI",
    version,
    long_about = "pdr — PDR Tracker CLI\n\nRecord professional-development activities, link them as evidence\nto competencies, and check when a competency is ready to level up."
)]
struct Cli {
    /// Data directory (default: $PDR_HOME or ~/.pdr)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage activities
    Activity {
        #[command(subcommand)]
        subcommand: ActivityCommands,
    },

    /// Manage competencies and evidence
    Competency {
        #[command(subcommand)]
        subcommand: CompetencyCommands,
    },

    /// Manage the user profile
    Profile {
        #[command(subcommand)]
        subcommand: ProfileCommands,
    },

    /// Show activity and competency statistics
    Stats,

    /// Build a report
    Report {
        #[command(subcommand)]
        subcommand: ReportCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ActivityCommands {
    /// Record a new activity (starts pending)
    Add {
        /// Activity type (training, certification, project, education)
        #[arg(long, default_value = "training")]
        r#type: String,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Completion date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "")]
        provider: String,

        /// Attach a documentation reference (repeatable)
        #[arg(long = "doc")]
        docs: Vec<String>,

        #[arg(long)]
        reflection: Option<String>,
    },

    /// List activities
    List {
        /// Only show activities with this status
        #[arg(long)]
        status: Option<String>,

        /// Only show activities of this type
        #[arg(long)]
        r#type: Option<String>,
    },

    /// Update fields of an activity
    Update {
        id: String,

        #[command(flatten)]
        fields: ActivityFields,
    },

    /// Mark an activity verified
    Verify { id: String },

    /// Mark an activity rejected
    Reject { id: String },

    /// Delete an activity (no error if absent)
    Delete { id: String },
}

#[derive(Args, Debug)]
struct ActivityFields {
    #[arg(long)]
    r#type: Option<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    provider: Option<String>,

    /// Replace documentation references (repeatable)
    #[arg(long = "doc")]
    docs: Option<Vec<String>>,

    #[arg(long)]
    reflection: Option<String>,
}

#[derive(Subcommand, Debug)]
enum CompetencyCommands {
    /// Start tracking a competency (starts at beginner)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// List competencies
    List,

    /// Show a competency with its evidence and eligibility
    Show { id: String },

    /// Link a stored activity as evidence for a competency
    Evidence {
        /// Competency ID
        competency: String,
        /// Activity ID
        activity: String,
    },

    /// Check level-up eligibility
    Check { id: String },

    /// Advance to the next level once eligible
    LevelUp {
        id: String,

        /// Advance even if the engine reports ineligible
        #[arg(long)]
        force: bool,
    },

    /// Update name, description, or status
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Status (in_progress, verified)
        #[arg(long)]
        status: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommands {
    /// Create or update the profile
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        supervisor: Option<String>,

        /// Joined date (YYYY-MM-DD)
        #[arg(long)]
        joined: Option<String>,

        /// Add a current goal (repeatable)
        #[arg(long = "goal")]
        goals: Vec<String>,

        /// Add a certification (repeatable)
        #[arg(long = "certification")]
        certifications: Vec<String>,
    },

    /// Show the profile
    Show,
}

#[derive(Subcommand, Debug)]
enum ReportCommands {
    /// Activities summary
    Activities {
        /// Time frame (all, month, quarter, year)
        #[arg(long, default_value = "all")]
        timeframe: String,
    },

    /// Competency development report
    Competencies,
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let out = Output {
        verbose: cli.verbose,
        json: cli.json,
    };

    let result = data_dir(cli.data_dir).and_then(|dir| run(cli.command, dir, out));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Copy)]
struct Output {
    verbose: bool,
    json: bool,
}

fn run(command: Commands, dir: PathBuf, out: Output) -> Result<()> {
    log::debug!("using data directory {}", dir.display());
    let mut session = Session::open(dir)?;

    let mutated = match command {
        Commands::Activity { subcommand } => match subcommand {
            ActivityCommands::Add {
                r#type,
                title,
                description,
                date,
                provider,
                docs,
                reflection,
            } => {
                let draft = ActivityDraft {
                    activity_type: Some(parse_activity_type(&r#type)?),
                    title: Some(title),
                    description: Some(description),
                    date_completed: date.as_deref().map(parse_date_arg).transpose()?,
                    provider: Some(provider),
                    documentation: Some(docs),
                    reflection,
                    ..ActivityDraft::default()
                };
                cmd_activity_add(&mut session, draft, out)?
            }
            ActivityCommands::List { status, r#type } => {
                cmd_activity_list(&session, status.as_deref(), r#type.as_deref(), out)?
            }
            ActivityCommands::Update { id, fields } => {
                cmd_activity_update(&mut session, &id, fields, out)?
            }
            ActivityCommands::Verify { id } => {
                cmd_activity_status(&mut session, &id, ActivityStatus::Verified, out)?
            }
            ActivityCommands::Reject { id } => {
                cmd_activity_status(&mut session, &id, ActivityStatus::Rejected, out)?
            }
            ActivityCommands::Delete { id } => cmd_activity_delete(&mut session, &id, out)?,
        },
        Commands::Competency { subcommand } => match subcommand {
            CompetencyCommands::Add { name, description } => {
                cmd_competency_add(&mut session, name, description, out)?
            }
            CompetencyCommands::List => cmd_competency_list(&session, out)?,
            CompetencyCommands::Show { id } => cmd_competency_show(&session, &id, out)?,
            CompetencyCommands::Evidence {
                competency,
                activity,
            } => cmd_competency_evidence(&mut session, &competency, &activity, out)?,
            CompetencyCommands::Check { id } => cmd_competency_check(&session, &id, out)?,
            CompetencyCommands::LevelUp { id, force } => {
                cmd_competency_level_up(&mut session, &id, force, out)?
            }
            CompetencyCommands::Update {
                id,
                name,
                description,
                status,
            } => {
                let patch = CompetencyPatch {
                    name,
                    description,
                    status: status.as_deref().map(parse_competency_status).transpose()?,
                    level: None,
                };
                cmd_competency_update(&mut session, &id, patch, out)?
            }
        },
        Commands::Profile { subcommand } => match subcommand {
            ProfileCommands::Set {
                name,
                role,
                department,
                supervisor,
                joined,
                goals,
                certifications,
            } => {
                let draft = ProfileDraft {
                    name,
                    role,
                    department,
                    supervisor,
                    joined_date: joined.as_deref().map(parse_date_arg).transpose()?,
                    current_goals: Some(goals),
                    certifications: Some(certifications),
                    competencies: None,
                };
                cmd_profile_set(&mut session, draft, out)?
            }
            ProfileCommands::Show => cmd_profile_show(&session, out)?,
        },
        Commands::Stats => cmd_stats(&session, out)?,
        Commands::Report { subcommand } => match subcommand {
            ReportCommands::Activities { timeframe } => {
                cmd_report_activities(&session, parse_timeframe(&timeframe)?, out)?
            }
            ReportCommands::Competencies => cmd_report_competencies(&session, out)?,
        },
    };

    if mutated {
        session.save()?;
    }
    Ok(())
}

// ── Activity commands ─────────────────────────────────────────────────────────
//
// Each command returns whether it changed state that needs saving.

/// `pdr activity add --title T --description D --provider P [--date D] [--type T]`
fn cmd_activity_add(session: &mut Session, draft: ActivityDraft, out: Output) -> Result<bool> {
    let activity = create_activity(draft);
    let added = session.store.add_activity(activity)?;

    if out.json {
        print_json(added)?;
    } else {
        println!("Activity recorded");
        println!("  ID:     {}", added.id);
        println!("  Title:  {}", added.title);
        println!("  Status: {}", added.status);
    }
    Ok(true)
}

/// `pdr activity list [--status S] [--type T]`
fn cmd_activity_list(
    session: &Session,
    status: Option<&str>,
    kind: Option<&str>,
    out: Output,
) -> Result<bool> {
    let status = status
        .map(|s| {
            ActivityStatus::from_tag(s).ok_or_else(|| {
                anyhow!("unknown activity status: '{s}'. Use: pending, verified, rejected")
            })
        })
        .transpose()?;
    let kind = kind.map(parse_activity_type).transpose()?;

    let selected: Vec<&Activity> = session
        .store
        .activities()
        .iter()
        .filter(|a| status.map_or(true, |s| a.status == s))
        .filter(|a| kind.map_or(true, |k| a.activity_type == k))
        .collect();

    if out.json {
        print_json(&selected)?;
        return Ok(false);
    }

    if selected.is_empty() {
        println!("No activities found.");
        return Ok(false);
    }

    println!("Activities ({}):", selected.len());
    for a in selected {
        print_activity(a, out.verbose);
    }
    Ok(false)
}

/// `pdr activity update ID [--title T] ...`
fn cmd_activity_update(
    session: &mut Session,
    id: &str,
    fields: ActivityFields,
    out: Output,
) -> Result<bool> {
    let patch = ActivityPatch {
        activity_type: fields.r#type.as_deref().map(parse_activity_type).transpose()?,
        title: fields.title,
        description: fields.description,
        date_completed: fields.date.as_deref().map(parse_date_arg).transpose()?,
        provider: fields.provider,
        documentation: fields.docs,
        reflection: fields.reflection,
        ..ActivityPatch::default()
    };
    if patch.is_empty() {
        return Err(anyhow!("nothing to update; pass at least one field"));
    }

    let updated = session
        .store
        .update_activity(&ActivityId(id.to_string()), &patch)?;

    if out.json {
        print_json(updated)?;
    } else {
        println!("Activity updated");
        print_activity(updated, out.verbose);
    }
    Ok(true)
}

/// `pdr activity verify ID` / `pdr activity reject ID`
fn cmd_activity_status(
    session: &mut Session,
    id: &str,
    status: ActivityStatus,
    out: Output,
) -> Result<bool> {
    let updated = session
        .store
        .update_activity(&ActivityId(id.to_string()), &ActivityPatch::status(status))?;

    if out.json {
        print_json(updated)?;
    } else {
        println!("Activity {} marked {}", updated.id, updated.status);
    }
    Ok(true)
}

/// `pdr activity delete ID`
fn cmd_activity_delete(session: &mut Session, id: &str, out: Output) -> Result<bool> {
    let removed = session.store.delete_activity(&ActivityId(id.to_string()));

    if out.json {
        print_json(&serde_json::json!({ "id": id, "removed": removed }))?;
    } else if removed {
        println!("Activity {id} deleted");
    } else {
        println!("Activity {id} not present; nothing to delete");
    }
    Ok(removed)
}

// ── Competency commands ───────────────────────────────────────────────────────

fn lookup_competency<'a>(session: &'a Session, id: &str) -> Result<&'a Competency> {
    session
        .store
        .competency(&CompetencyId(id.to_string()))
        .ok_or_else(|| anyhow!("competency '{id}' not found"))
}

/// `pdr competency add --name N [--description D]`
fn cmd_competency_add(
    session: &mut Session,
    name: String,
    description: String,
    out: Output,
) -> Result<bool> {
    let competency = create_competency(CompetencyDraft::new(name, description));
    let added = session.store.add_competency(competency)?;

    if out.json {
        print_json(added)?;
    } else {
        println!("Competency added");
        println!("  ID:    {}", added.id);
        println!("  Name:  {}", added.name);
        println!("  Level: {}", added.level);
    }

    let id = added.id.clone();
    if let Some(ref mut profile) = session.profile {
        profile.competencies.push(id);
    }
    Ok(true)
}

/// `pdr competency list`
fn cmd_competency_list(session: &Session, out: Output) -> Result<bool> {
    let competencies = session.store.competencies();

    if out.json {
        print_json(&competencies)?;
        return Ok(false);
    }

    if competencies.is_empty() {
        println!("No competencies tracked. Use `pdr competency add` to start.");
        return Ok(false);
    }

    println!("Competencies ({}):", competencies.len());
    for c in competencies {
        print_competency(c);
    }
    Ok(false)
}

/// `pdr competency show ID`
fn cmd_competency_show(session: &Session, id: &str, out: Output) -> Result<bool> {
    let c = lookup_competency(session, id)?;
    let assessment = assess_level_up(c);

    if out.json {
        print_json(&serde_json::json!({
            "competency": c,
            "progress": assessment.progress,
            "assessment": assessment,
        }))?;
        return Ok(false);
    }

    println!("Competency: {}", c.name);
    println!("  ID:          {}", c.id);
    if !c.description.is_empty() {
        println!("  Description: {}", c.description);
    }
    println!("  Level:       {} ({}%)", c.level, c.level.ladder_percent());
    println!("  Status:      {}", c.status);
    println!("  Progress:    {}%", assessment.progress);
    println!(
        "  Level-up:    {}",
        if assessment.is_eligible {
            "eligible"
        } else {
            "not yet"
        }
    );

    if c.evidence.is_empty() {
        println!("  Evidence:    none");
    } else {
        println!("  Evidence ({}):", c.evidence.len());
        for (i, e) in c.evidence.iter().enumerate() {
            println!("    {}. {} ({}) {}", i + 1, e.title, e.status, e.date_completed);
        }
    }
    Ok(false)
}

/// `pdr competency evidence COMPETENCY ACTIVITY`
fn cmd_competency_evidence(
    session: &mut Session,
    competency: &str,
    activity: &str,
    out: Output,
) -> Result<bool> {
    let updated = session.store.link_evidence(
        &CompetencyId(competency.to_string()),
        &ActivityId(activity.to_string()),
    )?;

    if out.json {
        print_json(updated)?;
    } else {
        println!("Evidence linked");
        print_competency(updated);
    }
    Ok(true)
}

/// `pdr competency check ID`
fn cmd_competency_check(session: &Session, id: &str, out: Output) -> Result<bool> {
    let c = lookup_competency(session, id)?;
    let a = assess_level_up(c);

    if out.json {
        print_json(&a)?;
        return Ok(false);
    }

    println!(
        "Level-up check for '{}': {} -> {}",
        c.name, a.current_level, a.target_level
    );
    println!(
        "  Verified evidence: {} / {} {}",
        a.verified_count,
        a.requirement.min_verified,
        if a.meets_verified { "ok" } else { "short" }
    );
    println!(
        "  Total evidence:    {} / {} {}",
        a.evidence_count,
        a.requirement.min_evidence,
        if a.meets_evidence { "ok" } else { "short" }
    );
    println!(
        "  Progress:          {}% / {}% {}",
        a.progress,
        progression::PROGRESS_THRESHOLD,
        if a.meets_progress { "ok" } else { "short" }
    );
    println!("  Eligible: {}", if a.is_eligible { "yes" } else { "no" });
    if out.verbose {
        for s in &a.shortfalls {
            println!("    - {s}");
        }
    }
    Ok(false)
}

/// `pdr competency level-up ID [--force]`
fn cmd_competency_level_up(
    session: &mut Session,
    id: &str,
    force: bool,
    out: Output,
) -> Result<bool> {
    let c = lookup_competency(session, id)?;
    let assessment = assess_level_up(c);

    if assessment.target_level == c.level {
        return Err(anyhow!(
            "competency '{}' is already at {}",
            c.name,
            c.level
        ));
    }
    if !assessment.is_eligible && !force {
        return Err(anyhow!(
            "competency '{}' is not eligible for {}: {}",
            c.name,
            assessment.target_level,
            assessment.shortfalls.join("; ")
        ));
    }
    if !assessment.is_eligible {
        log::warn!("forcing level-up of {id} despite ineligibility");
    }

    let updated = session.store.update_competency(
        &CompetencyId(id.to_string()),
        &CompetencyPatch::level_up(assessment.target_level),
    )?;

    if out.json {
        print_json(updated)?;
    } else {
        println!(
            "Competency '{}' advanced to {}",
            updated.name, updated.level
        );
    }
    Ok(true)
}

/// `pdr competency update ID [--name N] [--description D] [--status S]`
fn cmd_competency_update(
    session: &mut Session,
    id: &str,
    patch: CompetencyPatch,
    out: Output,
) -> Result<bool> {
    if patch == CompetencyPatch::default() {
        return Err(anyhow!("nothing to update; pass at least one field"));
    }
    let updated = session
        .store
        .update_competency(&CompetencyId(id.to_string()), &patch)?;

    if out.json {
        print_json(updated)?;
    } else {
        println!("Competency updated");
        print_competency(updated);
    }
    Ok(true)
}

// ── Profile commands ──────────────────────────────────────────────────────────

/// `pdr profile set [--name N] [--role R] ...`
fn cmd_profile_set(session: &mut Session, draft: ProfileDraft, out: Output) -> Result<bool> {
    let profile = match session.profile.take() {
        None => {
            let mut draft = draft;
            draft.competencies = Some(
                session
                    .store
                    .competencies()
                    .iter()
                    .map(|c| c.id.clone())
                    .collect(),
            );
            create_profile(draft)
        }
        Some(mut existing) => {
            if let Some(v) = draft.name {
                existing.name = v;
            }
            if let Some(v) = draft.role {
                existing.role = v;
            }
            if let Some(v) = draft.department {
                existing.department = v;
            }
            if let Some(v) = draft.supervisor {
                existing.supervisor = v;
            }
            if let Some(v) = draft.joined_date {
                existing.joined_date = v;
            }
            push_unique(&mut existing.current_goals, draft.current_goals);
            push_unique(&mut existing.certifications, draft.certifications);
            existing
        }
    };

    if out.json {
        print_json(&profile)?;
    } else {
        println!("Profile saved: {}", profile.heading());
    }
    session.profile = Some(profile);
    Ok(true)
}

/// Append each value not already in `list`.
fn push_unique(list: &mut Vec<String>, values: Option<Vec<String>>) {
    for v in values.unwrap_or_default() {
        if !list.contains(&v) {
            list.push(v);
        }
    }
}

/// `pdr profile show`
fn cmd_profile_show(session: &Session, out: Output) -> Result<bool> {
    let profile = session
        .profile
        .as_ref()
        .ok_or_else(|| anyhow!("no profile set; use `pdr profile set`"))?;

    if out.json {
        print_json(profile)?;
        return Ok(false);
    }

    println!("Profile: {}", profile.heading());
    println!("  ID:         {}", profile.id);
    println!("  Department: {}", profile.department);
    println!("  Supervisor: {}", profile.supervisor);
    println!("  Joined:     {}", pdr_tracker::time::long_date(&profile.joined_date));
    if !profile.current_goals.is_empty() {
        println!("  Goals:");
        for g in &profile.current_goals {
            println!("    - {g}");
        }
    }
    if !profile.certifications.is_empty() {
        println!("  Certifications: {}", profile.certifications.join(", "));
    }
    Ok(false)
}

// ── Stats and reports ─────────────────────────────────────────────────────────

/// `pdr stats`
fn cmd_stats(session: &Session, out: Output) -> Result<bool> {
    let activities = activity_stats(session.store.activities());
    let competencies = competency_stats(session.store.competencies());

    if out.json {
        print_json(&serde_json::json!({
            "activities": activities,
            "competencies": competencies,
        }))?;
        return Ok(false);
    }

    println!("Activities");
    println!("  Total:             {}", activities.total);
    println!("  Verified:          {}", activities.verified);
    println!("  Pending:           {}", activities.pending);
    println!("  Verification rate: {:.2}%", activities.verification_rate);
    for (kind, count) in &activities.by_type {
        println!("    {kind}: {count}");
    }
    println!("Competencies");
    println!("  Total:             {}", competencies.total);
    println!("  Achieved:          {}", competencies.achieved);
    println!("  In progress:       {}", competencies.in_progress);
    println!("  Achievement rate:  {:.2}%", competencies.achievement_rate);
    Ok(false)
}

/// `pdr report activities [--timeframe T]`
fn cmd_report_activities(session: &Session, timeframe: Timeframe, out: Output) -> Result<bool> {
    let report = activity_report(
        session.store.activities(),
        session.profile.as_ref(),
        timeframe,
        pdr_tracker::time::today(),
    );

    if out.json {
        print_json(&report)?;
        return Ok(false);
    }

    println!("{}", report.header.title);
    if !report.header.subject.is_empty() {
        println!("{}", report.header.subject);
    }
    if !report.header.department.is_empty() {
        println!("Department: {}", report.header.department);
    }
    println!("Time frame: {}", report.timeframe);
    println!();
    println!(
        "{:<20} {:<32} {:<14} {:<24} {}",
        "Date", "Activity", "Type", "Provider", "Status"
    );
    for row in &report.rows {
        println!(
            "{:<20} {:<32} {:<14} {:<24} {}",
            pdr_tracker::time::long_date(&row.date),
            row.title,
            row.activity_type.as_tag(),
            row.provider,
            row.status
        );
    }
    println!();
    println!(
        "{} activities, {} verified ({:.2}%)",
        report.stats.total, report.stats.verified, report.stats.verification_rate
    );
    Ok(false)
}

/// `pdr report competencies`
fn cmd_report_competencies(session: &Session, out: Output) -> Result<bool> {
    let report = competency_report(session.store.competencies(), session.profile.as_ref());

    if out.json {
        print_json(&report)?;
        return Ok(false);
    }

    println!("{}", report.header.title);
    if !report.header.subject.is_empty() {
        println!("{}", report.header.subject);
    }
    for entry in &report.entries {
        println!();
        println!("{}", entry.name);
        println!("  Level:    {}", entry.level);
        println!("  Status:   {}", entry.status);
        println!("  Progress: {}%", entry.progress);
        if entry.eligible_for_level_up {
            println!("  Ready for next level");
        }
        if !entry.evidence.is_empty() {
            println!("  Evidence:");
            for (i, e) in entry.evidence.iter().enumerate() {
                println!("    {}. {} ({})", i + 1, e.title, e.status);
            }
        }
    }
    println!();
    println!(
        "{} competencies, {} achieved ({:.2}%)",
        report.stats.total, report.stats.achieved, report.stats.achievement_rate
    );
    Ok(false)
}
