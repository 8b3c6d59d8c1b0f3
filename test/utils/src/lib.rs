#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

use std::env;

use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;

pub fn insta_snapshot<F: FnOnce()>(f: F) {
    let mut settings = insta::Settings::clone_current();
    let snapshot_path = env::current_dir().unwrap().join("./test/snapshots");
    settings.set_snapshot_path(snapshot_path);
    settings.bind(f);
}

/// 09:41 local time, so rendered clock labels stay stable across machines.
pub fn fixed_time() -> DateTime<Local> {
    return Local
        .with_ymd_and_hms(2023, 10, 19, 9, 41, 0)
        .single()
        .unwrap();
}
