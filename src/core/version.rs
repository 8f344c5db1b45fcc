use crate::domain::model::{PatchOutcome, ValueStyle, VersionTarget};
use crate::domain::ports::TextStore;
use crate::utils::error::Result;

/// Release-building files whose version lines are rewritten by default.
pub fn default_targets() -> Vec<VersionTarget> {
    vec![
        VersionTarget {
            path: "release_building/installer.nsi".to_string(),
            prefix: "!define VERSION ".to_string(),
            style: ValueStyle::Quoted,
            terminator: None,
        },
        VersionTarget {
            path: "release_building/win.bat".to_string(),
            prefix: "set \"_VERSION_=".to_string(),
            style: ValueStyle::Bare,
            terminator: Some("\"".to_string()),
        },
    ]
}

/// The full replacement line, without line ending.
pub fn render_line(target: &VersionTarget, version: &str) -> String {
    let mut line = target.prefix.clone();
    match target.style {
        ValueStyle::Quoted => {
            line.push('"');
            line.push_str(version);
            line.push('"');
        }
        ValueStyle::Bare => line.push_str(version),
    }
    if let Some(terminator) = &target.terminator {
        line.push_str(terminator);
    }
    line
}

/// Rewrites the first line starting with the target's prefix. The line keeps
/// its own ending (`\n`, `\r\n`, or none at EOF); all other bytes are kept.
pub fn patch_text(text: &str, target: &VersionTarget, version: &str) -> (String, PatchOutcome) {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line);

        if content.starts_with(&target.prefix) {
            let replacement = render_line(target, version);
            if replacement == content {
                return (text.to_string(), PatchOutcome::Unchanged { line: replacement });
            }

            let ending = &line[content.len()..];
            let mut patched = String::with_capacity(text.len() + replacement.len());
            patched.push_str(&text[..offset]);
            patched.push_str(&replacement);
            patched.push_str(ending);
            patched.push_str(&text[offset + line.len()..]);
            return (patched, PatchOutcome::Updated { line: replacement });
        }

        offset += line.len();
    }

    (text.to_string(), PatchOutcome::PrefixNotFound)
}

pub struct VersionPatcher<S: TextStore> {
    store: S,
    targets: Vec<VersionTarget>,
}

impl<S: TextStore> VersionPatcher<S> {
    pub fn new(store: S, targets: Vec<VersionTarget>) -> Self {
        Self { store, targets }
    }

    pub fn targets(&self) -> &[VersionTarget] {
        &self.targets
    }

    /// Patches every target in order. A file is only written back when its
    /// content changed.
    pub fn apply(&self, version: &str) -> Result<Vec<(VersionTarget, PatchOutcome)>> {
        let mut report = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            let original = self.store.read_to_string(&target.path)?;
            let (patched, outcome) = patch_text(&original, target, version);

            match &outcome {
                PatchOutcome::Updated { line } => {
                    self.store.write(&target.path, &patched)?;
                    tracing::info!("✏️ {}: {}", target.path, line);
                }
                PatchOutcome::Unchanged { .. } => {
                    tracing::info!("{} already at {}", target.path, version);
                }
                PatchOutcome::PrefixNotFound => {
                    tracing::warn!(
                        "⚠️ {}: no line starts with {:?}, file left unchanged",
                        target.path,
                        target.prefix
                    );
                }
            }

            report.push((target.clone(), outcome));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nsi() -> VersionTarget {
        default_targets().remove(0)
    }

    fn bat() -> VersionTarget {
        default_targets().remove(1)
    }

    #[test]
    fn test_render_line() {
        assert_eq!(render_line(&nsi(), "1.2.3"), "!define VERSION \"1.2.3\"");
        assert_eq!(render_line(&bat(), "1.2.3"), "set \"_VERSION_=1.2.3\"");
    }

    #[test]
    fn test_patch_first_match_only() {
        let text = "Name \"RTOS\"\n!define VERSION \"0.1\"\n!define VERSION \"0.0\"\n";
        let (patched, outcome) = patch_text(text, &nsi(), "0.2");
        assert_eq!(
            patched,
            "Name \"RTOS\"\n!define VERSION \"0.2\"\n!define VERSION \"0.0\"\n"
        );
        assert_eq!(
            outcome,
            PatchOutcome::Updated {
                line: "!define VERSION \"0.2\"".to_string()
            }
        );
    }

    #[test]
    fn test_patch_preserves_crlf() {
        let text = "@echo off\r\nset \"_VERSION_=0.1\"\r\ncall build.bat\r\n";
        let (patched, _) = patch_text(text, &bat(), "0.2");
        assert_eq!(patched, "@echo off\r\nset \"_VERSION_=0.2\"\r\ncall build.bat\r\n");
    }

    #[test]
    fn test_patch_last_line_without_newline() {
        let (patched, _) = patch_text("x\n!define VERSION \"1\"", &nsi(), "2");
        assert_eq!(patched, "x\n!define VERSION \"2\"");
    }

    #[test]
    fn test_patch_prefix_must_start_line() {
        let text = "; !define VERSION \"1\"\n";
        let (patched, outcome) = patch_text(text, &nsi(), "2");
        assert_eq!(patched, text);
        assert_eq!(outcome, PatchOutcome::PrefixNotFound);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let text = "set \"_VERSION_=0.1\"\n";
        let (once, _) = patch_text(text, &bat(), "0.9");
        let (twice, outcome) = patch_text(&once, &bat(), "0.9");
        assert_eq!(once, twice);
        assert!(matches!(outcome, PatchOutcome::Unchanged { .. }));
    }
}
