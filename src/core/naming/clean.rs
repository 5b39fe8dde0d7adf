//! Name cleaning
//!
//! Turns CAD names into file-system friendly file name fragments. The order
//! of operations is fixed; dots are always replaced because the host export
//! silently drops or fails on them.

use regex::Regex;
use std::sync::OnceLock;

fn version_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" v[0-9]*$").expect("version tag pattern is valid"))
}

fn instance_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":[0-9]+\+").expect("instance separator pattern is valid"))
}

fn trailing_instance() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":[0-9]+$").expect("trailing instance pattern is valid"))
}

/// Clean a single name
///
/// 1. with `strip_version_tag`, drop a trailing ` v<digits>`
/// 2. replace `:` with `__`
/// 3. with `normalize_spacing`, trim and replace spaces with `_`
/// 4. replace `.` with `__`
///
/// # Examples
///
/// ```
/// use filtered_export::core::naming::clean_name;
///
/// assert_eq!(clean_name("Bracket v3", true, false), "Bracket");
/// assert_eq!(clean_name("Part 1.2", false, false), "Part 1__2");
/// assert_eq!(clean_name(" Side Panel v12 ", false, true), "Side_Panel_v12");
/// ```
pub fn clean_name(raw: &str, strip_version_tag: bool, normalize_spacing: bool) -> String {
    let mut result = if strip_version_tag {
        version_tag().replace(raw, "").into_owned()
    } else {
        raw.to_string()
    };

    result = result.replace(':', "__");

    if normalize_spacing {
        result = result.trim().replace(' ', "_");
    }

    result.replace('.', "__")
}

/// Clean a full occurrence path such as `Table:1+Leg:2`
///
/// With `strip_version_tag` the instance suffixes are removed (`:<n>+`
/// becomes `-`, a trailing `:<n>` is dropped). Otherwise `+` and `:` are
/// both replaced with `__`. The result then goes through [`clean_name`].
///
/// # Examples
///
/// ```
/// use filtered_export::core::naming::clean_component_path;
///
/// assert_eq!(clean_component_path("Table:1+Leg:2", true, false), "Table-Leg");
/// assert_eq!(clean_component_path("Table:1+Leg:2", false, false), "Table__1__Leg__2");
/// ```
pub fn clean_component_path(path: &str, strip_version_tag: bool, normalize_spacing: bool) -> String {
    let intermediate = if strip_version_tag {
        let joined = instance_separator().replace_all(path, "-");
        trailing_instance().replace(&joined, "").into_owned()
    } else {
        path.replace('+', "__").replace(':', "__")
    };

    clean_name(&intermediate, strip_version_tag, normalize_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Bracket v3", true, false, "Bracket" ; "strips version tag")]
    #[test_case("Bracket v3x", true, false, "Bracket v3x" ; "keeps non digit suffix")]
    #[test_case("Bracket v", true, false, "Bracket" ; "strips bare v")]
    #[test_case("Bracket v3", false, false, "Bracket v3" ; "keeps tag when not stripping")]
    #[test_case("Bracket v3 copy", true, false, "Bracket v3 copy" ; "only at end")]
    #[test_case("Part 1.2", false, false, "Part 1__2" ; "dots always replaced")]
    #[test_case("Leg:1", false, false, "Leg__1" ; "colons always replaced")]
    #[test_case("  Side Panel  ", false, true, "Side_Panel" ; "trim then underscore")]
    #[test_case("Side Panel v2.1", true, true, "Side_Panel_v2__1" ; "dotted version not stripped")]
    #[test_case("Top Plate v7", true, true, "Top_Plate" ; "all flags")]
    #[test_case("", true, true, "" ; "empty")]
    fn test_clean_name(raw: &str, strip: bool, normalize: bool, expected: &str) {
        assert_eq!(clean_name(raw, strip, normalize), expected);
    }

    #[test]
    fn test_normalize_replaces_each_space() {
        // inner runs of spaces are not collapsed
        assert_eq!(clean_name("a  b", false, true), "a__b");
    }

    #[test_case("Table:1+Leg:2", true, false, "Table-Leg" ; "strips instances")]
    #[test_case("Table:1+Leg:2+Foot:10", true, false, "Table-Leg-Foot" ; "multi level")]
    #[test_case("Table:1+Leg:2", false, false, "Table__1__Leg__2" ; "keeps instances")]
    #[test_case("Assy v3:1+Side Rail:1", true, true, "Assy_v3-Side_Rail" ; "spacing after strip")]
    #[test_case("Top v2:1", true, true, "Top" ; "version before instance")]
    #[test_case("Part.A:1", false, false, "Part__A__1" ; "dots in path")]
    fn test_clean_component_path(path: &str, strip: bool, normalize: bool, expected: &str) {
        assert_eq!(clean_component_path(path, strip, normalize), expected);
    }
}
