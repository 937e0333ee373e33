//! Element name → class name, namespace and file path resolution.
//!
//! `create:controller admin/user` resolves to class `UserController` in
//! namespace `App\Controller\Admin`, stored at `Controller/Admin/UserController.php`
//! under the configured source directory.

use heck::{ToPascalCase, ToSnakeCase};

use crate::domain::{entities::common::RelativePath, error::DomainError};

pub const NAMESPACE_SEPARATOR: char = '\\';

/// Resolved placement of one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLocation {
    /// Fully resolved namespace, without leading or trailing separators.
    pub namespace: String,
    /// Short class name including the postfix.
    pub class: String,
    /// Class name with the postfix stripped, e.g. `User` for `UserController`.
    pub base_name: String,
    /// File path relative to the source directory.
    pub path: RelativePath,
}

impl ClassLocation {
    /// Fully qualified class name.
    pub fn fqcn(&self) -> String {
        join_namespace([self.namespace.as_str(), self.class.as_str()])
    }

    /// `snake_case` form of the base name, used for config keys, file names
    /// and console command names.
    pub fn snake_name(&self) -> String {
        self.base_name.to_snake_case()
    }
}

/// Resolve an element name for a kind.
pub fn resolve_location(
    element: &str,
    root_namespace: &str,
    kind_namespace: &str,
    postfix: &str,
) -> Result<ClassLocation, DomainError> {
    let segments = split_element(element)?;
    let (leaf, parents) = segments
        .split_last()
        .ok_or_else(|| invalid(element, "name cannot be empty"))?;

    let base_name = strip_postfix(leaf, postfix).to_string();
    let class = apply_postfix(leaf, postfix);

    let mut namespace_parts: Vec<&str> = vec![root_namespace, kind_namespace];
    namespace_parts.extend(parents.iter().map(String::as_str));
    let namespace = join_namespace(namespace_parts);

    let mut path = std::path::PathBuf::new();
    for dir in kind_namespace
        .split(NAMESPACE_SEPARATOR)
        .filter(|s| !s.is_empty())
    {
        path.push(dir);
    }
    for parent in parents {
        path.push(parent);
    }
    path.push(format!("{class}.php"));

    Ok(ClassLocation {
        namespace,
        class,
        base_name,
        path: RelativePath::try_new(path)?,
    })
}

/// Split `admin/user` (or `admin\user`) into class-cased segments.
pub fn split_element(element: &str) -> Result<Vec<String>, DomainError> {
    let trimmed = element.trim();
    if trimmed.is_empty() {
        return Err(invalid(element, "name cannot be empty"));
    }

    trimmed
        .split(['/', NAMESPACE_SEPARATOR])
        .filter(|s| !s.trim().is_empty())
        .map(|segment| classify(element, segment.trim()))
        .collect::<Result<Vec<_>, _>>()
        .and_then(|segments| {
            if segments.is_empty() {
                Err(invalid(element, "name cannot be empty"))
            } else {
                Ok(segments)
            }
        })
}

/// Class-case a single segment.
///
/// Plain identifiers keep their inner casing (`HTTPClient` stays as is);
/// separated words are PascalCased (`blog_post` → `BlogPost`).
fn classify(element: &str, segment: &str) -> Result<String, DomainError> {
    if let Some(bad) = segment
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ' | '.')))
    {
        return Err(invalid(
            element,
            &format!("character '{bad}' is not allowed"),
        ));
    }

    let class = if segment.contains(['_', '-', ' ', '.']) {
        segment.to_pascal_case()
    } else {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    };

    match class.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Ok(class),
        _ => Err(invalid(element, "each segment must start with a letter")),
    }
}

/// Append `postfix` unless the name already ends with it.
pub fn apply_postfix(name: &str, postfix: &str) -> String {
    if postfix.is_empty() || name.ends_with(postfix) {
        name.to_string()
    } else {
        format!("{name}{postfix}")
    }
}

/// Drop a trailing `postfix`, keeping the name when nothing would remain.
pub fn strip_postfix<'a>(name: &'a str, postfix: &str) -> &'a str {
    if postfix.is_empty() {
        return name;
    }
    name.strip_suffix(postfix)
        .filter(|rest| !rest.is_empty())
        .unwrap_or(name)
}

/// Join namespace parts, skipping empty ones and stray separators.
pub fn join_namespace<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(|p| p.trim_matches(NAMESPACE_SEPARATOR))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\\")
}

/// Short name of a fully qualified class (`Spiral\ORM\Record` → `Record`).
pub fn short_name(fqcn: &str) -> &str {
    let trimmed = fqcn.trim_start_matches(NAMESPACE_SEPARATOR);
    trimmed
        .rsplit(NAMESPACE_SEPARATOR)
        .next()
        .unwrap_or(trimmed)
}

/// Namespace part of a fully qualified class (`Spiral\ORM\Record` → `Spiral\ORM`).
pub fn namespace_of(fqcn: &str) -> &str {
    let trimmed = fqcn.trim_start_matches(NAMESPACE_SEPARATOR);
    trimmed
        .rsplit_once(NAMESPACE_SEPARATOR)
        .map(|(ns, _)| ns)
        .unwrap_or("")
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn simple_controller() {
        let loc = resolve_location("user", "App", "Controller", "Controller").unwrap();
        assert_eq!(loc.class, "UserController");
        assert_eq!(loc.base_name, "User");
        assert_eq!(loc.namespace, "App\\Controller");
        assert_eq!(loc.path.as_path(), Path::new("Controller/UserController.php"));
        assert_eq!(loc.fqcn(), "App\\Controller\\UserController");
    }

    #[test]
    fn nested_element_extends_namespace_and_path() {
        let loc = resolve_location("admin/user", "App", "Controller", "Controller").unwrap();
        assert_eq!(loc.namespace, "App\\Controller\\Admin");
        assert_eq!(
            loc.path.as_path(),
            Path::new("Controller/Admin/UserController.php")
        );
    }

    #[test]
    fn backslash_separator_accepted() {
        let loc = resolve_location("admin\\user", "App", "Controller", "Controller").unwrap();
        assert_eq!(loc.namespace, "App\\Controller\\Admin");
    }

    #[test]
    fn postfix_not_duplicated() {
        let loc = resolve_location("UserController", "App", "Controller", "Controller").unwrap();
        assert_eq!(loc.class, "UserController");
    }

    #[test]
    fn typed_postfix_gives_same_base_name() {
        let short = resolve_location("user", "App", "Controller", "Controller").unwrap();
        let long = resolve_location("UserController", "App", "Controller", "Controller").unwrap();
        assert_eq!(long.base_name, "User");
        assert_eq!(long.base_name, short.base_name);
        assert_eq!(long.snake_name(), short.snake_name());

        let config = resolve_location("MailConfig", "App", "Config", "Config").unwrap();
        assert_eq!(config.snake_name(), "mail");

        let command = resolve_location("SyncCommand", "App", "Command", "Command").unwrap();
        assert_eq!(command.snake_name(), "sync");

        let migration = resolve_location("CreateUsersMigration", "App", "", "Migration").unwrap();
        assert_eq!(migration.snake_name(), "create_users");
    }

    #[test]
    fn postfix_alone_is_kept() {
        let loc = resolve_location("config", "App", "Config", "Config").unwrap();
        assert_eq!(loc.class, "Config");
        assert_eq!(loc.base_name, "Config");
        assert_eq!(loc.snake_name(), "config");
    }

    #[test]
    fn empty_postfix_and_namespace() {
        let loc = resolve_location("auth", "App", "Middleware", "").unwrap();
        assert_eq!(loc.class, "Auth");

        let loc = resolve_location("create_users", "App", "", "Migration").unwrap();
        assert_eq!(loc.class, "CreateUsersMigration");
        assert_eq!(loc.namespace, "App");
        assert_eq!(loc.path.as_path(), Path::new("CreateUsersMigration.php"));
    }

    #[test]
    fn separated_words_are_pascal_cased() {
        let loc = resolve_location("blog-post", "App", "Database", "").unwrap();
        assert_eq!(loc.class, "BlogPost");
        assert_eq!(loc.snake_name(), "blog_post");
    }

    #[test]
    fn inner_casing_preserved() {
        let loc = resolve_location("HTTPClient", "App", "", "").unwrap();
        assert_eq!(loc.class, "HTTPClient");
    }

    #[test]
    fn nested_root_namespace() {
        let loc = resolve_location("user", "\\Acme\\Shop\\", "Filter", "Filter").unwrap();
        assert_eq!(loc.namespace, "Acme\\Shop\\Filter");
    }

    #[test]
    fn rejects_bad_names() {
        for name in ["", "   ", "//", "1user", "user$", "admin/9"] {
            assert!(
                matches!(
                    resolve_location(name, "App", "Controller", "Controller"),
                    Err(DomainError::InvalidName { .. })
                ),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn short_name_and_namespace_of() {
        assert_eq!(short_name("Spiral\\ORM\\Record"), "Record");
        assert_eq!(short_name("\\Record"), "Record");
        assert_eq!(namespace_of("Spiral\\ORM\\Record"), "Spiral\\ORM");
        assert_eq!(namespace_of("Record"), "");
    }
}
