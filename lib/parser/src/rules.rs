// Line recognition rules, evaluated in order; the first rule that fires wins
use once_cell::sync::Lazy;
use regex::Regex;

/// Demo/legacy annotation: `LSA: A -> B cost=10`
static LSA_ARROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"LSA:\s*(\S+)\s*->\s*(\S+)(?:\s*cost=([0-9]+))?").expect("valid LSA regex")
});

// ASCII digits and ASCII word boundaries only; `\d` and `\b` are Unicode-aware
static DOTTED_QUAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{1,3}(?:\.[0-9]{1,3}){3}(?-u:\b)").expect("valid IPv4 regex")
});

static STANDALONE_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)([0-9]{1,6})(?-u:\b)").expect("valid integer regex"));

/// Costs scraped from dump columns are only trusted inside this range
const DUMP_COST_RANGE: std::ops::RangeInclusive<u64> = 1..=9999;

const DEFAULT_COST: u64 = 1;

/// Verdict of a rule that recognised a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// The line describes a link between two endpoints
    Link { a: String, b: String, cost: u64 },
    /// The line was recognised but carries nothing usable; drop it silently
    Rejected,
}

/// A named line matcher. Returning `None` passes the line to the next rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: fn(&str) -> Option<LineMatch>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Recognition rules in priority order
pub const RULES: &[Rule] = &[
    Rule {
        name: "lsa_arrow",
        matcher: match_lsa_arrow,
    },
    Rule {
        name: "dotted_quad_pair",
        matcher: match_dotted_quad_pair,
    },
];

/// Run the rule table against a trimmed line
pub fn classify(line: &str) -> Option<(&'static str, LineMatch)> {
    RULES
        .iter()
        .find_map(|rule| (rule.matcher)(line).map(|m| (rule.name, m)))
}

/// `LSA: <a> -> <b> [cost=<n>]`. A missing or overflowing cost becomes `1`.
pub fn match_lsa_arrow(line: &str) -> Option<LineMatch> {
    let caps = LSA_ARROW.captures(line)?;
    let cost = caps
        .get(3)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(DEFAULT_COST);

    Some(LineMatch::Link {
        a: caps[1].to_string(),
        b: caps[2].to_string(),
        cost,
    })
}

/// Two IPv4-shaped tokens, as in `show ip ospf database` rows.
///
/// The first two addresses on the line are the endpoints. The cost is the
/// first standalone integer of at most six digits after the second address,
/// kept only when it falls in `1..=9999`. A row whose two addresses are
/// identical (advertising router equals link ID) is rejected.
pub fn match_dotted_quad_pair(line: &str) -> Option<LineMatch> {
    let mut quads = DOTTED_QUAD.find_iter(line);
    let first = quads.next()?;
    let second = quads.next()?;

    if first.as_str() == second.as_str() {
        return Some(LineMatch::Rejected);
    }

    let rest = &line[second.end()..];
    let cost = STANDALONE_INT
        .captures(rest)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .filter(|n| DUMP_COST_RANGE.contains(n))
        .unwrap_or(DEFAULT_COST);

    Some(LineMatch::Link {
        a: first.as_str().to_string(),
        b: second.as_str().to_string(),
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(a: &str, b: &str, cost: u64) -> Option<LineMatch> {
        Some(LineMatch::Link {
            a: a.to_string(),
            b: b.to_string(),
            cost,
        })
    }

    #[test]
    fn test_lsa_arrow_with_and_without_cost() {
        assert_eq!(match_lsa_arrow("LSA: A -> B cost=5"), link("A", "B", 5));
        assert_eq!(match_lsa_arrow("LSA: B -> C"), link("B", "C", 1));
        assert_eq!(match_lsa_arrow("LSA:R1->R2 cost=10"), link("R1", "R2", 10));
        assert_eq!(match_lsa_arrow("area0 LSA: R1 -> R2"), link("R1", "R2", 1));
    }

    #[test]
    fn test_lsa_arrow_overflowing_cost_defaults() {
        assert_eq!(
            match_lsa_arrow("LSA: A -> B cost=99999999999999999999999"),
            link("A", "B", 1)
        );
    }

    #[test]
    fn test_lsa_arrow_requires_marker_and_arrow() {
        assert_eq!(match_lsa_arrow("A -> B cost=5"), None);
        assert_eq!(match_lsa_arrow("LSA: A B cost=5"), None);
        assert_eq!(match_lsa_arrow("LSA: A ->"), None);
    }

    #[test]
    fn test_dotted_quad_pair_takes_first_integer_after_pair() {
        assert_eq!(
            match_dotted_quad_pair(
                "10.199.242.7    10.199.242.14   1129 0x8000007a 0x960e 10.199.242.7/32"
            ),
            link("10.199.242.7", "10.199.242.14", 1129)
        );
    }

    #[test]
    fn test_dotted_quad_pair_addresses_anywhere() {
        assert_eq!(
            match_dotted_quad_pair("Link ID 10.0.0.1 via router 10.0.0.2 metric 20"),
            link("10.0.0.1", "10.0.0.2", 20)
        );
    }

    #[test]
    fn test_dotted_quad_pair_cost_out_of_range() {
        assert_eq!(
            match_dotted_quad_pair("10.0.0.1 10.0.0.2 12345 0x80000001"),
            link("10.0.0.1", "10.0.0.2", 1)
        );
        assert_eq!(
            match_dotted_quad_pair("10.0.0.1 10.0.0.2 0"),
            link("10.0.0.1", "10.0.0.2", 1)
        );
        assert_eq!(
            match_dotted_quad_pair("10.0.0.1 10.0.0.2"),
            link("10.0.0.1", "10.0.0.2", 1)
        );
    }

    #[test]
    fn test_dotted_quad_pair_skips_non_standalone_numbers() {
        // Hex words and seven-digit columns are not standalone integers
        assert_eq!(
            match_dotted_quad_pair("10.0.0.1 10.0.0.2 0x80 1234567 42"),
            link("10.0.0.1", "10.0.0.2", 42)
        );
    }

    #[test]
    fn test_dotted_quad_pair_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not address octets
        assert_eq!(match_dotted_quad_pair("١٠.٠.٠.١ ١٠.٠.٠.٢ 5"), None);
        assert_eq!(
            match_dotted_quad_pair("10.0.0.1 10.0.0.2 ٣ 42"),
            link("10.0.0.1", "10.0.0.2", 42)
        );
        assert_eq!(match_lsa_arrow("LSA: A -> B cost=٥"), link("A", "B", 1));
    }

    #[test]
    fn test_dotted_quad_pair_self_pair_rejected() {
        assert_eq!(
            match_dotted_quad_pair("10.0.0.9  10.0.0.9  300 0x80000002"),
            Some(LineMatch::Rejected)
        );
    }

    #[test]
    fn test_dotted_quad_pair_needs_two_addresses() {
        assert_eq!(match_dotted_quad_pair("Router Link States (Area 0.0.0.0)"), None);
        assert_eq!(match_dotted_quad_pair("no addresses here 42"), None);
    }

    #[test]
    fn test_classify_priority() {
        // Would yield cost 3600 under the dump rule; the annotation rule wins
        let (rule, verdict) = classify("LSA: 10.0.0.1 -> 10.0.0.2 3600").unwrap();
        assert_eq!(rule, "lsa_arrow");
        assert_eq!(verdict, LineMatch::Link {
            a: "10.0.0.1".to_string(),
            b: "10.0.0.2".to_string(),
            cost: 1,
        });

        let (rule, _) = classify("10.0.0.1 10.0.0.2 40").unwrap();
        assert_eq!(rule, "dotted_quad_pair");

        assert!(classify("OSPF Router with ID (10.0.0.1)").is_none());
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["lsa_arrow", "dotted_quad_pair"]);
    }
}
