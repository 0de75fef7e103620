//! Status synonym tables
//!
//! The backend reports the same logical status under several spellings
//! (English and Spanish, with underscores, hyphens or spaces). Filtering and
//! aggregation both go through these tables. Spellings are stored in
//! [`normalize`]d form.

/// Logical order status groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderBucket {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderBucket {
    /// All buckets
    pub const ALL: [OrderBucket; 4] = [
        OrderBucket::Pending,
        OrderBucket::InProgress,
        OrderBucket::Completed,
        OrderBucket::Cancelled,
    ];

    /// Bucket tag accepted as a filter value
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Backend spellings belonging to this bucket
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            Self::Pending => &["pending", "pendiente", "created", "creado"],
            Self::InProgress => &[
                "in_progress",
                "in_transit",
                "assigned",
                "en_progreso",
                "en_curso",
                "en_transito",
                "en_tránsito",
                "asignado",
            ],
            Self::Completed => &["completed", "delivered", "completado", "entregado", "finalizado"],
            Self::Cancelled => &["cancelled", "canceled", "cancelado", "anulado"],
        }
    }

    /// Whether a raw status belongs to this bucket
    pub fn matches(self, status: &str) -> bool {
        is_one_of(status, self.spellings())
    }

    /// Resolve a requested filter value to a bucket
    ///
    /// Accepts the bucket tag or any of its spellings, ignoring case and
    /// separator style (`in-progress`, `In Progress`, `in_progress`).
    pub fn lookup(requested: &str) -> Option<Self> {
        let requested = normalize(requested);
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.tag() == requested || bucket.spellings().contains(&requested.as_str()))
    }
}

/// Client statuses counted as active
pub const ACTIVE_STATUSES: &[&str] = &["active", "activo"];

/// Vehicle and driver statuses counted as available
pub const AVAILABLE_STATUSES: &[&str] = &["available", "disponible"];

/// Canonical form of a status spelling
///
/// Lowercase, trimmed, with runs of spaces, hyphens and underscores
/// collapsed to a single underscore.
pub fn normalize(status: &str) -> String {
    let mut out = String::with_capacity(status.len());
    let mut pending_separator = false;
    for c in status.trim().chars() {
        if c == ' ' || c == '-' || c == '_' {
            pending_separator = !out.is_empty();
        } else {
            if pending_separator {
                out.push('_');
                pending_separator = false;
            }
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Membership test against a normalized spelling set
pub fn is_one_of(status: &str, spellings: &[&str]) -> bool {
    let status = normalize(status);
    spellings.contains(&status.as_str())
}

/// Case-insensitive exact comparison
pub fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_are_normalized_and_disjoint() {
        for bucket in OrderBucket::ALL {
            assert_eq!(normalize(bucket.tag()), bucket.tag());
            for spelling in bucket.spellings() {
                assert_eq!(*spelling, normalize(spelling));
                let owners = OrderBucket::ALL
                    .into_iter()
                    .filter(|b| b.matches(spelling))
                    .count();
                assert_eq!(owners, 1, "{} belongs to several buckets", spelling);
            }
        }
    }

    #[test]
    fn test_lookup_by_tag_and_spelling() {
        assert_eq!(OrderBucket::lookup("in_progress"), Some(OrderBucket::InProgress));
        assert_eq!(OrderBucket::lookup("EN_PROGRESO"), Some(OrderBucket::InProgress));
        assert_eq!(OrderBucket::lookup("Entregado"), Some(OrderBucket::Completed));
        assert_eq!(OrderBucket::lookup("on hold"), None);
    }

    #[test]
    fn test_lookup_ignores_separator_style() {
        for requested in ["in-progress", "In-Progress", "in progress", " IN_PROGRESS "] {
            assert_eq!(OrderBucket::lookup(requested), Some(OrderBucket::InProgress), "{}", requested);
        }
        assert_eq!(OrderBucket::lookup("En Tránsito"), Some(OrderBucket::InProgress));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  En  Curso "), "en_curso");
        assert_eq!(normalize("in--progress"), "in_progress");
        assert_eq!(normalize("_pending_"), "pending");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(OrderBucket::Completed.matches("ENTREGADO"));
        assert!(OrderBucket::Pending.matches(" Pendiente "));
        assert!(!OrderBucket::Pending.matches("cancelado"));
        assert!(OrderBucket::InProgress.matches("en-transito"));
        assert!(OrderBucket::InProgress.matches("En Progreso"));
    }

    #[test]
    fn test_is_one_of() {
        assert!(is_one_of("Activo", ACTIVE_STATUSES));
        assert!(!is_one_of("Inactivo", ACTIVE_STATUSES));
        assert!(is_one_of("DISPONIBLE", AVAILABLE_STATUSES));
    }
}
