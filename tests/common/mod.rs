//! Common test utilities for Shimpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Configuration mirroring a real loader setup: seven libraries, four of
/// them shimmed onto jquery, one with a second dependency.
pub const EXAMPLE_CONFIG: &str = r"base_url: scripts/base
paths:
  jquery: ../lib/jquery/dist/jquery
  underscore: ../lib/underscore/underscore
  bootstrap: ../lib/bootstrap/bootstrap
  jqueryVimeoEmbed: ../lib/jquery-smart-vimeo-embed/jquery-smartvimeoembed
  alertifyjs: ../lib/alertifyjs/build/alertify
  notification: ../plugins/notifications
  jquery_ujs: ../plugins/jquery_ujs
shim:
  bootstrap:
    deps: [jquery]
  jqueryVimeoEmbed:
    deps: [jquery]
  notification:
    deps: [jquery, alertifyjs]
  jquery_ujs:
    deps: [jquery]
require:
  - jquery
  - underscore
  - bootstrap
  - jquery_ujs
  - alertifyjs
  - jqueryVimeoEmbed
  - notification
  - plugins/miscellaneous
bundle:
  name: notification
  out: dist/main.js
";

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create an empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with the example configuration and module sources
    pub fn with_example_config() -> Self {
        let project = Self::new();
        project.write_file("shimpack.yaml", EXAMPLE_CONFIG);
        project.write_file(
            "scripts/lib/jquery/dist/jquery.js",
            "/*! jQuery v3.7.1 | MIT */\nvar jQuery = {};\n",
        );
        project.write_file("scripts/lib/underscore/underscore.js", "var _ = {};\n");
        project.write_file(
            "scripts/lib/bootstrap/bootstrap.js",
            "jQuery.fn.modal = function () {};\n",
        );
        project.write_file(
            "scripts/lib/jquery-smart-vimeo-embed/jquery-smartvimeoembed.js",
            "jQuery.fn.smartVimeoEmbed = function () {};\n",
        );
        project.write_file(
            "scripts/lib/alertifyjs/build/alertify.js",
            "/*! alertifyjs 1.13 | MIT */\nvar alertify = {};\n",
        );
        project.write_file(
            "scripts/plugins/notifications.js",
            "//! notifications plugin | MIT\n// poll for pending notifications\nalertify.notify('ready');\n",
        );
        project.write_file(
            "scripts/plugins/jquery_ujs.js",
            "jQuery(document).on('click', function () {});\n",
        );
        project.write_file(
            "scripts/base/plugins/miscellaneous.js",
            "var misc = true;\n",
        );
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// A shimpack command running inside this project
    pub fn cmd(&self) -> assert_cmd::Command {
        #[allow(deprecated)]
        let mut cmd = assert_cmd::Command::cargo_bin("shimpack").expect("binary builds");
        cmd.current_dir(&self.path);
        cmd
    }
}
