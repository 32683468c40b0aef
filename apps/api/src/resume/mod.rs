//! Resume Provider: the document the assistant answers questions about.
//!
//! The text comes from a file on disk when one exists and has content,
//! otherwise from [`DEFAULT_RESUME_CONTEXT`]. Absence of the file is never an
//! error. The file is re-read on every call so edits show up without a restart.

pub mod handlers;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Source label reported when the embedded text is in use.
pub const EMBEDDED_SOURCE: &str = "embedded_default";

/// Fallback resume used when no resume file is available.
pub const DEFAULT_RESUME_CONTEXT: &str = r#"
Name: Alex Morgan
Location: Bengaluru, India

EDUCATION:
- B.Tech in Computer Science and Engineering (2022 - 2026)
- Senior Secondary (CBSE), science stream

TECHNICAL SKILLS:
- Programming Languages: C, Python, Java, Rust (learning), ARM Assembly
- Web: HTML, CSS, JavaScript, React
- Database: MySQL, SQLite
- Tools: Git, Linux, Docker, MS Office
- Key Subjects: Data Structures, Algorithms, Operating Systems, Computer Networks,
  DBMS, Compiler Design, Embedded Systems, Parallel Computing

PROJECTS & INTERNSHIPS:

1. Software Testing Internship
   - Wrote JUnit suites covering reliability and performance of production software
   - Validated new features through structured test plans
   - Built a Java module that parses and analyses sensor readings

2. Campus Connect (Flutter, Firebase)
   - Mobile app connecting students and faculty
   - Real-time event notifications backed by Firebase

3. ATM Simulator (JavaFX, MySQL)
   - Withdrawals, deposits and bill payments with persistent transaction records

4. Embedded Security System (ARM Assembly, LPC1768)
   - Sensor-driven monitoring with alarm triggers for unauthorised access

KEY STRENGTHS:
- Problem solving, team collaboration, critical thinking, learning agility

ABOUT:
Alex is a final-year Computer Science student with a foundation in systems
programming, embedded systems and full-stack development.
"#;

/// Resume text together with the label of where it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub text: String,
    pub source: String,
}

impl ResumeDocument {
    pub fn embedded() -> Self {
        Self {
            text: DEFAULT_RESUME_CONTEXT.trim().to_string(),
            source: EMBEDDED_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResumeProvider {
    path: PathBuf,
}

impl ResumeProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the resume file, falling back to the embedded text when the file
    /// is missing, unreadable, or blank after trimming.
    pub async fn load(&self) -> ResumeDocument {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let text = raw.trim();
                if !text.is_empty() {
                    return ResumeDocument {
                        text: text.to_string(),
                        source: self.file_label(),
                    };
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Could not read resume file {}: {e}; using embedded resume",
                self.path.display()
            ),
        }

        ResumeDocument::embedded()
    }

    pub async fn context(&self) -> String {
        self.load().await.text
    }

    pub async fn source(&self) -> String {
        self.load().await.source
    }

    fn file_label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
