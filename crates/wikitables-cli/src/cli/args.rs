//! Pre-clap argument rewriting.
//!
//! `-UA` is a single-dash multi-letter flag, which clap cannot declare. It is
//! rewritten to `--user_agent` before parsing.

use std::ffi::OsString;

const UA_SHORT: &str = "-UA";
const UA_LONG: &str = "--user_agent";

pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter().map(|a| rewrite(a.into())).collect()
}

fn rewrite(arg: OsString) -> OsString {
    let Some(s) = arg.to_str() else {
        return arg;
    };
    if s == UA_SHORT {
        return OsString::from(UA_LONG);
    }
    match s.strip_prefix(UA_SHORT).and_then(|rest| rest.strip_prefix('=')) {
        Some(value) => OsString::from(format!("{UA_LONG}={value}")),
        None => arg,
    }
}
