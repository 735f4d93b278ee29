//! Built-in commands.
//!
//! Each module exposes `run(session, args, console)`, where `args` excludes the
//! command word. Diagnostics come back as `ShellError` for the dispatcher to
//! print; commands that keep going past a failed argument print those
//! themselves.

pub mod cat;
pub mod cd;
pub mod help;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod rm;
pub mod rmdir;
pub mod touch;
