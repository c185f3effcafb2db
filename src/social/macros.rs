/// Runs a statement and reports how long it took on stderr.
///
/// The plain form prints the label before running so long stages show what
/// they are doing; `at once` prints label and duration together afterwards.
/// Prefix either form with `quiet = <bool>;` to skip reporting at runtime.
#[macro_export]
macro_rules! time_it {
    (quiet = $quiet:expr; $($rest:tt)+) => {{
        if $quiet {
            $crate::time_it!(@silent $($rest)+)
        } else {
            $crate::time_it!($($rest)+)
        }
    }};
    (@silent at once | $comment:expr => $stmt:stmt) => {{
        $stmt
    }};
    (@silent $comment:expr => $stmt:stmt) => {{
        $stmt
    }};
    (at once | $comment:expr => $stmt:stmt) => {{
        let start = std::time::Instant::now();
        let result = { $stmt };
        let duration = start.elapsed();
        eprintln!("{} => {:?}", $comment, duration);
        result
    }};
    ($comment:expr => $stmt:stmt) => {{
        use std::io::Write;
        eprint!("{}", $comment);
        let _ = std::io::stderr().flush();
        let start = std::time::Instant::now();
        let result = { $stmt };
        let duration = start.elapsed();
        eprintln!(" => {:?}", duration);
        result
    }};
}
