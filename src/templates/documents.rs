//! Document templates: README, LICENSE, Go sources, module descriptor and
//! ignore file.

/// Go version recorded in the generated `go.mod`.
const GO_MOD_VERSION: &str = "1.17";

/// MIT license text below the copyright line. Starts with the blank line
/// that separates it from the copyright line.
const MIT_BODY: &str = r#"
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

const GITIGNORE: &str = r#"# ---> Go
# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary
*.test

# Output of the go coverage tool, specifically when used with LiteIDE
*.out

bin/
# Dependency directories (remove the comment below to include it)
# vendor/
.DS_Store

dist/
"#;

const MAIN_TEST_GO: &str = r#"package main

import (
	"testing"
)

func TestFunc(t *testing.T) {
	if 1 != 2 {
		t.Errorf("update test to be useful")
	}
}
"#;

/// `Copyright (c) <year> <author>` terminated by exactly one newline.
///
/// The author is embedded verbatim. git prints it with a trailing newline,
/// in which case no second one is added.
fn copyright_line(year: i32, author: &str) -> String {
    let mut line = format!("Copyright (c) {} {}", year, author);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

pub(crate) fn license(year: i32, author: &str) -> String {
    let mut out = String::from("MIT License\n\n");
    out.push_str(&copyright_line(year, author));
    out.push_str(MIT_BODY);
    out
}

pub(crate) fn readme(year: i32, dir_name: &str, author: &str, org: &str) -> String {
    let mut out = format!("# {dir_name}\n\nPLACEHOLDER\n\n");
    out.push_str(&format!("## how to use\n\n```sh\n{dir_name}\n```\n\n"));
    out.push_str(&format!(
        "## how to install\n\n```sh\ncurl -s https://raw.githubusercontent.com/{org}/{dir_name}/scripts/install.sh | bash\n```\n\n"
    ));
    out.push_str(&format!(
        "## how to build and run\n\n```sh\n./scripts/build\n./bin/{dir_name}\n```\n\n"
    ));
    out.push_str("## how to test\n\n```sh\n./scripts/test\n```\n\n");
    out.push_str("## license\n\n");
    out.push_str(&license(year, author));
    out
}

pub(crate) fn gitignore() -> String {
    GITIGNORE.to_string()
}

/// Exactly `module github.com/<org>/<dir>\n\ngo 1.17`, no trailing newline.
pub(crate) fn go_mod(org: &str, dir_name: &str) -> String {
    format!("module github.com/{org}/{dir_name}\n\ngo {GO_MOD_VERSION}")
}

/// The license as a `/* ** ... */` block comment for Go sources.
fn go_license_header(year: i32, author: &str) -> String {
    let mut out = String::from("/*\n** MIT License\n**\n");
    for line in copyright_line(year, author).lines().chain(MIT_BODY.lines()) {
        if line.is_empty() {
            out.push_str("**\n");
        } else {
            out.push_str("** ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("*/\n");
    out
}

pub(crate) fn main_go(year: i32, dir_name: &str, author: &str) -> String {
    let mut out = go_license_header(year, author);
    out.push_str(&format!(
        r#"package main

import (
	"fmt"
	"os"
)

func usage() string {{
	return "usage: {dir_name}"
}}

func main() {{
	args := os.Args
	if len(args) < 2 {{
		fmt.Println(usage())
		os.Exit(1)
	}}
}}
"#
    ));
    out
}

pub(crate) fn main_test_go(year: i32, author: &str) -> String {
    let mut out = go_license_header(year, author);
    out.push_str(MAIN_TEST_GO);
    out
}
