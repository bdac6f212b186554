//! Developer lifecycle scripts written to `scripts/`.
//!
//! Each is a bash script body. Only the binary name (and the org for the
//! install script) is interpolated; the rest is fixed text.

/// Go toolchain version installed by `scripts/bootstrap`.
const BOOTSTRAP_GO_VERSION: &str = "1.17.1";

/// golangci-lint version installed by `scripts/bootstrap`.
const GOLANGCI_LINT_VERSION: &str = "v1.36.0";

/// Resolves the directory the running script lives in.
const SCRIPT_DIR: &str = r#"DIR="$( cd "$( dirname "${BASH_SOURCE[0]}" )" >/dev/null 2>&1 && pwd )""#;

pub(crate) fn all() -> String {
    format!(
        r#"#!/bin/bash
# scripts/all: Runs several things together: lint, test, clean and build

{SCRIPT_DIR}

$DIR/lint
$DIR/test
$DIR/clean
$DIR/build
"#
    )
}

pub(crate) fn bootstrap() -> String {
    format!(
        r#"#!/bin/bash
# scripts/bootstrap: Resolve all dependencies that the application requires to
#                   run.

GOV="{BOOTSTRAP_GO_VERSION}"
if ! command -v go &> /dev/null
then
    echo "os $(uname -s) arch $(uname -m)"
    if [ "$(uname -s)" = "Darwin" ]; then
        echo "install via homebrew"
        brew update
        brew install go
    fi

    if [ "$(uname -s)" = "Linux" ] && [ "$(uname -m)" = "armv7l" ]; then
        echo "arm found installing go"
        curl -L -O https://golang.org/dl/go$GOV.linux-armv6l.tar.gz
        sudo tar -C /usr/local -xzf go$GOV.linux-armv6l.tar.gz
        echo "add 'export PATH=\$PATH:/usr/local/go/bin' to your .bashrc"
        rm go$GOV.linux-armv6l.tar.gz
    fi

    if [ "$(uname -s)" = "Linux" ] && [ "$(uname -m)" = "aarch64" ]; then
        echo "arm64 found installing go"
        curl -L -O https://golang.org/dl/go$GOV.linux-arm64.tar.gz
        sudo tar -C /usr/local -xzf go$GOV.linux-arm64.tar.gz
        echo "add 'export PATH=\$PATH:/usr/local/go/bin' to your .bashrc"
        rm go$GOV.linux-arm64.tar.gz
    fi

    if [ "$(uname -s)" = "Linux" ] && [ "$(uname -m)" = "x86_64" ]; then
        echo "amd64 found installing go"
        curl -L -O https://golang.org/dl/go$GOV.linux-amd64.tar.gz
        sudo tar -C /usr/local -xzf go$GOV.linux-amd64.tar.gz
        echo "add 'export PATH=\$PATH:/usr/local/go/bin' to your .bashrc"
        rm go$GOV.linux-amd64.tar.gz
    fi

else
    echo "go installed skipping"
fi

if ! command -v golangci-lint &> /dev/null
then
    curl -sSfL https://raw.githubusercontent.com/golangci/golangci-lint/master/install.sh | sh -s -- -b $(go env GOPATH)/bin {GOLANGCI_LINT_VERSION}
else
    echo "golangci-lint installed skipping"
fi
"#
    )
}

pub(crate) fn build(bin_name: &str) -> String {
    format!(
        r#"#!/bin/bash
# scripts/build: Compiles binary and outputs it to the bin folder

rm -fr ./bin
mkdir ./bin
go build -o bin/{bin_name} .
"#
    )
}

pub(crate) fn cibuild() -> String {
    format!(
        r#"#!/bin/bash
# scripts/cibuild: Setup environment for CI to run tests. This is primarily
#                 designed to run on the continuous integration server.

{SCRIPT_DIR}

$DIR/setup && \
$DIR/lint && \
$DIR/test && \
$DIR/build
"#
    )
}

pub(crate) fn clean() -> String {
    r#"#!/bin/bash
# scripts/clean: Remove build binary files

rm -fr ./bin
mkdir ./bin
"#
    .to_string()
}

pub(crate) fn cover_html() -> String {
    r#"#!/bin/bash
# scripts/cover-html: See the coverage report in a webpage

t="/tmp/go-cover.$$.tmp"
go test -race -covermode=atomic -coverprofile=$t ./... && go tool cover -html=$t && unlink $t
"#
    .to_string()
}

/// `scripts/install.sh` downloads the `main` branch archive from GitHub,
/// builds it and copies the binary to `/usr/local/bin`.
pub(crate) fn install(org: &str, bin_name: &str) -> String {
    format!(
        r#"#!/usr/bin/env bash
# scripts/install.sh: install script for others to use, install.sh is a convention and why the name is different

orig_dir=$(pwd)
cd /tmp
curl -L -o main.zip https://github.com/{org}/{bin_name}/archive/refs/heads/main.zip
unzip main.zip
rm main.zip
cd {bin_name}-main
./scripts/build
echo "copying binary to /usr/local/bin/{bin_name} need sudo permissions to write"
sudo cp ./bin/{bin_name} /usr/local/bin/
cd ..
rm -fr {bin_name}-main
cd $orig_dir
"#
    )
}

pub(crate) fn lint() -> String {
    r#"#!/bin/bash
# scripts/lint: verify no obvious bugs or layout problems are found

gofmt -s -w . && \
golangci-lint run
"#
    .to_string()
}

/// `scripts/package` cross-compiles the latest tag for darwin/linux on
/// amd64/arm64 and tars each binary.
pub(crate) fn package(bin_name: &str) -> String {
    let mut out = format!(
        r#"#!/bin/bash
# scripts/package: build and tgz all supported platforms and architectures

BIN={bin_name}
{SCRIPT_DIR}
$DIR/clean
VERSION=$(git describe --abbrev=0 --tags)
ORIG=$(git branch --show-current)
echo "packaging $VERSION"
git checkout $VERSION
"#
    );
    for (os, arch) in [
        ("darwin", "amd64"),
        ("darwin", "arm64"),
        ("linux", "amd64"),
        ("linux", "arm64"),
    ] {
        out.push_str(&format!(
            "GOOS={os} GOARCH={arch} go build -o bin/$BIN .\n\
             tar czvf ./bin/$BIN-$VERSION-{os}-{arch}.tgz ./bin/$BIN\n"
        ));
    }
    out.push_str("git checkout $ORIG\n");
    out
}

pub(crate) fn setup() -> String {
    format!(
        r#"#!/bin/bash
# scripts/setup: Set up application for the first time after cloning, or set it
#               back to the initial first unused state.

{SCRIPT_DIR}
$DIR/bootstrap && \
go mod verify
"#
    )
}

pub(crate) fn test() -> String {
    r#"#!/bin/bash
# scripts/test: Run test suite for application.

t="/tmp/go-cover.$$.tmp"
go test -race -covermode=atomic -coverprofile=$t ./... && go tool cover -func=$t
last=$?
unlink $t || true
if [ "$last" = "0" ]; then
    echo "successfully ran"
else
    (exit 1)
fi
"#
    .to_string()
}

pub(crate) fn update() -> String {
    format!(
        r#"#!/bin/bash
# scripts/update: Update application to run for its current checkout.

{SCRIPT_DIR}
$DIR/bootstrap
go mod tidy
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_script() -> Vec<String> {
        vec![
            all(),
            bootstrap(),
            build("foo"),
            cibuild(),
            clean(),
            cover_html(),
            install("bar", "foo"),
            lint(),
            package("foo"),
            setup(),
            test(),
            update(),
        ]
    }

    #[test]
    fn every_script_starts_with_shebang() {
        for script in every_script() {
            assert!(script.starts_with("#!/"), "missing shebang:\n{script}");
            assert!(script.ends_with('\n'));
        }
    }

    #[test]
    fn script_dir_line_is_expanded() {
        let text = all();
        assert!(text.contains(r#"DIR="$( cd "$( dirname "${BASH_SOURCE[0]}" )" >/dev/null 2>&1 && pwd )""#));
        assert!(!text.contains("{SCRIPT_DIR}"));
    }

    #[test]
    fn build_outputs_project_binary() {
        assert!(build("foo").contains("go build -o bin/foo .\n"));
    }

    #[test]
    fn install_uses_org_and_binary_name() {
        let text = install("bar", "foo");

        assert!(text.contains("https://github.com/bar/foo/archive/refs/heads/main.zip"));
        assert!(text.contains("sudo cp ./bin/foo /usr/local/bin/"));
        assert!(!text.contains("go-init"));
    }

    #[test]
    fn package_covers_every_target() {
        let text = package("foo");

        assert!(text.contains("BIN=foo\n"));
        for target in ["darwin-amd64", "darwin-arm64", "linux-amd64", "linux-arm64"] {
            assert!(text.contains(&format!("./bin/$BIN-$VERSION-{target}.tgz")), "{target}");
        }
        assert!(text.ends_with("git checkout $ORIG\n"));
    }

    #[test]
    fn bootstrap_pins_tool_versions() {
        let text = bootstrap();
        assert!(text.contains("GOV=\"1.17.1\""));
        assert!(text.contains("-b $(go env GOPATH)/bin v1.36.0"));
    }
}
