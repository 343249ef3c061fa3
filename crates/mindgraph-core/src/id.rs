use regex::Regex;
use rustc_hash::FxHashSet;

/// Base id used when a label has no word characters at all.
pub const FALLBACK_ID: &str = "node";

fn non_word_run_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W+").expect("valid regex"))
}

/// Collapses each run of non-word characters to `_` and lower-cases the result.
///
/// `"A!B"` and `"A@B"` both become `a_b`. Labels that sanitize to nothing yield [`FALLBACK_ID`].
pub fn sanitize_id(label: &str) -> String {
    let base = non_word_run_regex().replace_all(label, "_").to_lowercase();
    if base.is_empty() {
        return FALLBACK_ID.to_string();
    }
    base
}

/// Returns an id for `label` that is not in `existing`.
///
/// Collisions get the first free numeric suffix (`_1`, `_2`, ...). The set is not modified; the
/// caller must insert the result before asking for the next id.
pub fn generate_id(label: &str, existing: &FxHashSet<String>) -> String {
    let base = sanitize_id(label);
    if !existing.contains(&base) {
        return base;
    }
    let mut counter = 1usize;
    loop {
        let candidate = format!("{base}_{counter}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Per-build id set. Create one per build so suffixes restart at `_1`.
#[derive(Debug, Default, Clone)]
pub struct IdRegistry {
    ids: FxHashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a unique id for `label` and records it.
    pub fn register(&mut self, label: &str) -> String {
        let id = generate_id(label, &self.ids);
        self.ids.insert(id.clone());
        id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
