//! Anchored `*` matching for single context components.
//!
//! The matcher never sees a whole context string; the resolver hands it one
//! already-extracted component at a time, so `*` may freely span anything
//! inside that component.

/// Match `value` against `pattern`, anchored at both ends.
///
/// `*` matches any run of characters, including the empty run. There are no
/// other metacharacters and no escaping; a pattern without `*` only matches
/// its exact self.
pub fn match_pattern(pattern: &str, value: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return pattern == value;
    }

    let p = pattern.as_bytes();
    let v = value.as_bytes();
    let mut pi = 0;
    let mut vi = 0;
    // Position of the most recent `*` and the end of the span it currently
    // swallows; on a later mismatch the span is grown by one byte and the
    // scan resumes after it.
    let mut star: Option<usize> = None;
    let mut resume = 0;

    while vi < v.len() {
        if pi < p.len() && p[pi] == b'*' {
            star = Some(pi);
            resume = vi;
            pi += 1;
        } else if pi < p.len() && p[pi] == v[vi] {
            pi += 1;
            vi += 1;
        } else if let Some(star_pos) = star {
            pi = star_pos + 1;
            resume += 1;
            vi = resume;
        } else {
            return false;
        }
    }

    // Whatever pattern remains must be all `*`, each matching nothing.
    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}
