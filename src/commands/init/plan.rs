//! The fixed list of files a new project gets.

use crate::context::ProjectContext;
use crate::templates::Template;
use std::path::{Path, PathBuf};

/// Subdirectory holding the lifecycle scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// Subdirectory for build output. Created empty.
pub const BIN_DIR: &str = "bin";

/// Where each template lands, relative to the project directory, in the
/// order files are written.
const LAYOUT: &[(&str, Template)] = &[
    ("README.md", Template::Readme),
    ("LICENSE", Template::License),
    ("main.go", Template::MainGo),
    ("main_test.go", Template::MainTestGo),
    (".gitignore", Template::GitIgnore),
    ("go.mod", Template::GoMod),
    ("scripts/all", Template::AllScript),
    ("scripts/bootstrap", Template::BootstrapScript),
    ("scripts/build", Template::BuildScript),
    ("scripts/cibuild", Template::CiBuildScript),
    ("scripts/clean", Template::CleanScript),
    ("scripts/cover-html", Template::CoverHtmlScript),
    ("scripts/install.sh", Template::InstallScript),
    ("scripts/lint", Template::LintScript),
    ("scripts/package", Template::PackageScript),
    ("scripts/setup", Template::SetupScript),
    ("scripts/test", Template::TestScript),
    ("scripts/update", Template::UpdateScript),
];

/// One file to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    pub path: PathBuf,
    pub mode: u32,
    pub template: Template,
}

impl GenerationTask {
    fn new(path: PathBuf, template: Template) -> Self {
        Self {
            path,
            mode: template.family().mode(),
            template,
        }
    }

    /// Produce the file content for this run.
    pub fn content(&self, ctx: &ProjectContext) -> String {
        self.template.render(ctx)
    }
}

/// Build the ordered task list for a project rooted at `project_dir`.
pub fn plan_tasks(project_dir: &Path) -> Vec<GenerationTask> {
    LAYOUT
        .iter()
        .map(|(relative, template)| {
            let path = relative
                .split('/')
                .fold(project_dir.to_path_buf(), |acc, part| acc.join(part));
            GenerationTask::new(path, *template)
        })
        .collect()
}
