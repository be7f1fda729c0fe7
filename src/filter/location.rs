use crate::config::FilterPolicy;

/// Path segments of system headers and libraries.
const SYSTEM_ROOTS: &[&str] = &["/usr/include/", "/usr/lib/"];

const CORE_FOUNDATION: &str = "/CoreFoundation.framework";
const FOUNDATION: &str = "/Foundation.framework";
/// Header of the root object type, always kept with Foundation.
const ROOT_OBJECT_HEADER: &str = "NSObject.h";

/// Framework owning a header path: the segment before `.framework`, or the
/// whole path for headers outside a framework bundle.
///
/// # Example
/// ```
/// use metabase::filter::framework_from_path;
///
/// let path = "/SDK/System/Library/Frameworks/UIKit.framework/Headers/UIView.h";
/// assert_eq!(framework_from_path(path), "UIKit");
/// assert_eq!(framework_from_path("/usr/include/stdio.h"), "/usr/include/stdio.h");
/// ```
pub fn framework_from_path(path: &str) -> &str {
    match path.find(".framework") {
        Some(end) => {
            let start = path[..end].rfind('/').map_or(0, |slash| slash + 1);
            &path[start..end]
        }
        None => path,
    }
}

/// True for paths under a system include or library root.
pub fn is_system_location(path: &str) -> bool {
    SYSTEM_ROOTS.iter().any(|root| path.contains(root))
}

/// Decision for one location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verdict {
    pub excluded: bool,
    /// Framework to record as a dependency of this run.
    pub dependency: Option<String>,
}

/// Inclusion policy applied to declaration locations.
#[derive(Debug, Clone)]
pub struct LocationFilter<'a> {
    policy: &'a FilterPolicy,
    sdk_path: &'a str,
}

impl<'a> LocationFilter<'a> {
    pub fn new(policy: &'a FilterPolicy, sdk_path: &'a str) -> Self {
        Self { policy, sdk_path }
    }

    /// Decide whether a declaration at `location` is excluded from output.
    ///
    /// In single-framework mode every location outside the framework is
    /// reported as a dependency. CoreFoundation also keeps system headers,
    /// and Foundation always keeps `NSObject.h`.
    pub fn check(&self, location: &str) -> Verdict {
        match self.policy {
            FilterPolicy::SingleFramework(filter) => {
                if filter.contains(CORE_FOUNDATION) {
                    if is_system_location(location) {
                        return Verdict::default();
                    }
                    return self.framework_verdict(filter, location);
                }
                if filter.contains(FOUNDATION) && location.contains(ROOT_OBJECT_HEADER) {
                    return Verdict::default();
                }
                self.framework_verdict(filter, location)
            }
            FilterPolicy::ExcludeSystem => Verdict {
                excluded: is_system_location(location)
                    || (!self.sdk_path.is_empty() && location.contains(self.sdk_path)),
                dependency: None,
            },
            FilterPolicy::IncludeAll => Verdict::default(),
        }
    }

    fn framework_verdict(&self, filter: &str, location: &str) -> Verdict {
        if location.contains(filter) {
            return Verdict::default();
        }
        Verdict {
            excluded: true,
            dependency: Some(framework_from_path(location).to_string()),
        }
    }
}
