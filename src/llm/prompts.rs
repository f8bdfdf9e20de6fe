//! Prompt templates for resume rewriting

/// System instruction applied to every rewrite request. Enforces factual
/// non-fabrication: no invented employers, dates, titles, or metrics.
pub const SYSTEM_PROMPT: &str = "You are an expert HR resume coach. Preserve factual accuracy - \
do not invent employers, dates, titles, or metrics. Improve clarity, \
ATS compatibility, and relevance to the target job.";

/// Closed set of rewrite templates, each carrying its own prompt rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteTemplate {
    FullRewrite,
    SummaryOnly,
    SkillsAlignment,
    StarBullets,
    BilingualSummary,
}

impl RewriteTemplate {
    pub const ALL: [RewriteTemplate; 5] = [
        RewriteTemplate::FullRewrite,
        RewriteTemplate::SummaryOnly,
        RewriteTemplate::SkillsAlignment,
        RewriteTemplate::StarBullets,
        RewriteTemplate::BilingualSummary,
    ];

    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            RewriteTemplate::FullRewrite => "full",
            RewriteTemplate::SummaryOnly => "summary",
            RewriteTemplate::SkillsAlignment => "skills",
            RewriteTemplate::StarBullets => "star",
            RewriteTemplate::BilingualSummary => "bilingual",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RewriteTemplate::FullRewrite => "Full Resume Rewrite",
            RewriteTemplate::SummaryOnly => "Summary Only",
            RewriteTemplate::SkillsAlignment => "Skills Alignment",
            RewriteTemplate::StarBullets => "STAR Bullets (Experience)",
            RewriteTemplate::BilingualSummary => "CN/EN Bilingual Summary",
        }
    }

    pub fn parse(name: &str) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "full" => Ok(RewriteTemplate::FullRewrite),
            "summary" => Ok(RewriteTemplate::SummaryOnly),
            "skills" => Ok(RewriteTemplate::SkillsAlignment),
            "star" => Ok(RewriteTemplate::StarBullets),
            "bilingual" => Ok(RewriteTemplate::BilingualSummary),
            _ => Err(format!(
                "Unknown template: {}. Supported: full, summary, skills, star, bilingual",
                name
            )),
        }
    }

    /// Build the user-role prompt for this template
    pub fn render(&self, resume_text: &str, job_text: &str) -> String {
        self.body()
            .replace("{job_desc}", job_text)
            .replace("{resume}", resume_text)
    }

    fn body(&self) -> &'static str {
        match self {
            RewriteTemplate::FullRewrite => FULL_REWRITE_TEMPLATE,
            RewriteTemplate::SummaryOnly => SUMMARY_ONLY_TEMPLATE,
            RewriteTemplate::SkillsAlignment => SKILLS_ALIGNMENT_TEMPLATE,
            RewriteTemplate::StarBullets => STAR_BULLETS_TEMPLATE,
            RewriteTemplate::BilingualSummary => BILINGUAL_SUMMARY_TEMPLATE,
        }
    }
}

const FULL_REWRITE_TEMPLATE: &str = r#"Rewrite the resume to better align with the job description.
Rules:
- Keep facts truthful; DO NOT add new experience/skills.
- Emphasize relevant tools, skills, and achievements for this role.
- Use concise bullet points and impact verbs (STAR when possible).
- Keep under ~2 pages when rendered as text.

JOB DESCRIPTION:
{job_desc}

RESUME (SOURCE TRUTH):
{resume}
"#;

const SUMMARY_ONLY_TEMPLATE: &str = r#"Rewrite ONLY the resume SUMMARY to fit the job description.
- Keep facts truthful; do not add non-existent skills.
- 3-5 lines, skills-forward, include 1 metric if present.

JOB DESCRIPTION:
{job_desc}

RESUME SUMMARY:
{resume}
"#;

const SKILLS_ALIGNMENT_TEMPLATE: &str = r#"Produce a revised SKILLS section aligned to the job description.
- Include only skills actually present in the resume.
- Group by categories (Programming, Data, Cloud, Tools, etc.)
- Keep it compact and ATS-friendly.

JOB DESCRIPTION:
{job_desc}

RESUME SKILLS:
{resume}
"#;

const STAR_BULLETS_TEMPLATE: &str = r#"Rewrite the EXPERIENCE bullets using the STAR pattern (Situation-Task-Action-Result)
for RELEVANT roles only. Do not fabricate metrics.

JOB DESCRIPTION:
{job_desc}

RESUME EXPERIENCE:
{resume}
"#;

const BILINGUAL_SUMMARY_TEMPLATE: &str = r#"Write a bilingual summary (Chinese + English), 2-3 lines each, aligned to the job description.
Keep strictly to resume facts.

JOB DESCRIPTION:
{job_desc}

RESUME SUMMARY:
{resume}
"#;
