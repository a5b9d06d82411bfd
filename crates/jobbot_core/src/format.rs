//! Renders normalized backend payloads into display-ready message bodies.
//!
//! Marker glyphs stay immediately before the text they annotate; replacing
//! them with widget icons is the host's concern.

/// Greeting seeded into every fresh timeline.
pub const WELCOME_TEXT: &str = "🤖🎉 Welcome to Job Bot Assistance! I'm here to help you find the perfect up-to-date active job opportunities. You can ask me about Software Skills, Roles, Contract / Fulltime jobs, Location based job recommendations. [Note] - Must mention the job role while searching with date or location.";

/// Successful search with zero results.
pub const NO_JOBS_TEXT: &str = "⚠️ No jobs found for your query.";

/// Job search backend failure, any kind.
pub const JOBS_FAILED_TEXT: &str = "❌ Failed to fetch jobs. Please try again.";

/// Chat backend failure, any kind.
pub const CHAT_FAILED_TEXT: &str = "❌ Sorry, I can't connect to the job assistant server.";

/// Substitute for a successful chat response carrying no reply text.
pub const EMPTY_REPLY_TEXT: &str = "No response from bot.";

const RESULTS_HEADER: &str = "🚀 **Showing Related matches** 🔎🔥\n━━━━━━━━━━━━━━━━━━━━━━\n\n";
const BLOCK_DIVIDER: &str = "\n\n──────────────────────────\n\n";
const NOT_PROVIDED: &str = "Not Provided";
const NOT_AVAILABLE: &str = "Not Available";

/// A job listing normalized by the search adapter.
///
/// Optional fields render an explicit placeholder rather than being omitted,
/// so the body layout is identical for every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub posted: String,
    pub skills_required: Option<String>,
    pub experience_required: Option<String>,
    pub company_website: Option<String>,
    pub apply_link: Option<String>,
    pub hr_email: Option<String>,
    pub hr_contact: Option<String>,
}

/// A single reply from the chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

/// Adapter-boundary failure, already normalized to a value.
///
/// The two kinds render identically; the distinction only matters for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterFailure {
    Unreachable,
    MalformedResponse,
}

/// The terminal result of one dispatch, as handed to the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    JobSearch(Result<Vec<JobRecord>, AdapterFailure>),
    Chat(Result<ChatReply, AdapterFailure>),
}

/// Renders a dispatch outcome into the bodies of its delivery batch.
///
/// Always returns at least one body, failures included; the user is never
/// left without feedback. Every current outcome renders as exactly one body:
/// job results are concatenated into a single divided block list.
pub fn format_outcome(outcome: &DispatchOutcome) -> Vec<String> {
    let body = match outcome {
        DispatchOutcome::JobSearch(Ok(records)) if records.is_empty() => NO_JOBS_TEXT.to_string(),
        DispatchOutcome::JobSearch(Ok(records)) => {
            let blocks = records.iter().map(render_job_block).collect::<Vec<_>>();
            format!("{}{}", RESULTS_HEADER, blocks.join(BLOCK_DIVIDER))
        }
        DispatchOutcome::JobSearch(Err(_)) => JOBS_FAILED_TEXT.to_string(),
        DispatchOutcome::Chat(Ok(reply)) if reply.reply.is_empty() => EMPTY_REPLY_TEXT.to_string(),
        DispatchOutcome::Chat(Ok(reply)) => reply.reply.clone(),
        DispatchOutcome::Chat(Err(_)) => CHAT_FAILED_TEXT.to_string(),
    };
    vec![body]
}

/// One record rendered as a fixed-order labelled block. Lines end with two
/// trailing spaces so markdown hosts keep the hard breaks.
fn render_job_block(record: &JobRecord) -> String {
    let mut block = String::new();
    block.push_str(&format!("🌟 **{}**  \n", record.title));
    push_field(&mut block, "Company", &record.company);
    push_field(&mut block, "Location", &record.location);
    push_field(&mut block, "Job Type", &record.job_type);
    push_field(&mut block, "Salary", &record.salary);
    push_field(&mut block, "Posted On", &record.posted);
    push_field(
        &mut block,
        "Skills Required",
        present_or(&record.skills_required, NOT_PROVIDED),
    );
    push_field(
        &mut block,
        "Experience Required",
        present_or(&record.experience_required, NOT_PROVIDED),
    );
    push_link_field(&mut block, "Company Website", "Visit Website", &record.company_website);
    push_link_field(&mut block, "Apply Link", "Apply Here", &record.apply_link);
    push_field(
        &mut block,
        "HR Email",
        present_or(&record.hr_email, NOT_PROVIDED),
    );
    push_field(
        &mut block,
        "HR Contact",
        present_or(&record.hr_contact, NOT_PROVIDED),
    );
    block
}

fn push_field(block: &mut String, label: &str, value: &str) {
    block.push_str(&format!("➡️ **{}:** {}  \n", label, value));
}

fn push_link_field(block: &mut String, label: &str, anchor: &str, url: &Option<String>) {
    match url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => push_field(block, label, &format!("[{}]({})", anchor, url)),
        None => push_field(block, label, NOT_AVAILABLE),
    }
}

/// Blank and missing values collapse to the same placeholder so the layout
/// stays deterministic.
fn present_or<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}
