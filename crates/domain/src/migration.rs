use crate::dns_record::APEX;

/// Re-roots a CNAME target under `new_suffix`.
///
/// `@` stands for `old_suffix` itself, relative names are first qualified with `old_suffix`,
/// and absolute names are re-rooted as they are. The result is always dot-terminated.
///
/// ```
/// use ferrous_zone_domain::transform_cname;
///
/// assert_eq!(transform_cname("foo", "old.com", "new.com"), "foo.old.com.new.com.");
/// assert_eq!(transform_cname("foo.bar.", "old.com", "new.com"), "foo.bar.new.com.");
/// ```
pub fn transform_cname(name: &str, old_suffix: &str, new_suffix: &str) -> String {
    let base = if name == APEX {
        old_suffix.to_string()
    } else if let Some(absolute) = name.strip_suffix('.') {
        absolute.to_string()
    } else {
        format!("{}.{}", name, old_suffix)
    };
    format!("{}.{}.", base, new_suffix)
}
