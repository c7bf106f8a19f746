#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two-section fixture: `production` holds three keys, `debug` four.
pub const CONFIG_INI: &str = r#"; Application settings
[production]
host = localhost
username = user
password = mypassword

[debug]
isEnabled = 1
allowedIp = 192.168.1.2;10.1.2.2
password = mypassword
logFile = /var/log/app.log
"#;

/// A file written into its own temporary directory, removed on drop.
pub struct IniFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

pub fn write_fixture(name: &str, content: &str) -> IniFixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    IniFixture { dir, path }
}

pub fn config_fixture() -> IniFixture {
    write_fixture("config.ini", CONFIG_INI)
}
