//! Template producers.
//!
//! Each generated file has a logical [`Template`] name that maps to one pure
//! rendering function over [`ProjectContext`]. Nothing outside this module
//! builds file content.
//!
//! Templates fall into two families:
//! - documents (README, LICENSE, Go sources, `go.mod`, `.gitignore`)
//! - scripts (bash lifecycle scripts under `scripts/`)

mod documents;
mod scripts;

use crate::context::ProjectContext;
use std::fmt;

/// Family a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Document,
    Script,
}

impl Family {
    /// Permission bits for files of this family.
    pub fn mode(self) -> u32 {
        match self {
            Family::Document => 0o644,
            Family::Script => 0o755,
        }
    }
}

/// Logical name of every file go-init can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Readme,
    License,
    MainGo,
    MainTestGo,
    GitIgnore,
    GoMod,
    AllScript,
    BootstrapScript,
    BuildScript,
    CiBuildScript,
    CleanScript,
    CoverHtmlScript,
    InstallScript,
    LintScript,
    PackageScript,
    SetupScript,
    TestScript,
    UpdateScript,
}

impl Template {
    /// Render the complete file content.
    pub fn render(self, ctx: &ProjectContext) -> String {
        let ProjectContext {
            dir_name,
            org,
            author,
            year,
        } = ctx;
        let year = *year;

        match self {
            Template::Readme => documents::readme(year, dir_name, author, org),
            Template::License => documents::license(year, author),
            Template::MainGo => documents::main_go(year, dir_name, author),
            Template::MainTestGo => documents::main_test_go(year, author),
            Template::GitIgnore => documents::gitignore(),
            Template::GoMod => documents::go_mod(org, dir_name),
            Template::AllScript => scripts::all(),
            Template::BootstrapScript => scripts::bootstrap(),
            Template::BuildScript => scripts::build(dir_name),
            Template::CiBuildScript => scripts::cibuild(),
            Template::CleanScript => scripts::clean(),
            Template::CoverHtmlScript => scripts::cover_html(),
            Template::InstallScript => scripts::install(org, dir_name),
            Template::LintScript => scripts::lint(),
            Template::PackageScript => scripts::package(dir_name),
            Template::SetupScript => scripts::setup(),
            Template::TestScript => scripts::test(),
            Template::UpdateScript => scripts::update(),
        }
    }

    pub fn family(self) -> Family {
        match self {
            Template::Readme
            | Template::License
            | Template::MainGo
            | Template::MainTestGo
            | Template::GitIgnore
            | Template::GoMod => Family::Document,
            _ => Family::Script,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Template::Readme => "readme",
            Template::License => "license",
            Template::MainGo => "main-go",
            Template::MainTestGo => "main-test-go",
            Template::GitIgnore => "gitignore",
            Template::GoMod => "go-mod",
            Template::AllScript => "script-all",
            Template::BootstrapScript => "script-bootstrap",
            Template::BuildScript => "script-build",
            Template::CiBuildScript => "script-cibuild",
            Template::CleanScript => "script-clean",
            Template::CoverHtmlScript => "script-cover-html",
            Template::InstallScript => "script-install",
            Template::LintScript => "script-lint",
            Template::PackageScript => "script-package",
            Template::SetupScript => "script-setup",
            Template::TestScript => "script-test",
            Template::UpdateScript => "script-update",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
