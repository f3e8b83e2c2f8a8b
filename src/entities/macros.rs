//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the struct, the [`Entity`](crate::core::Entity)
//! implementation, identity equality and fluent setters for each resource.

/// Create a resource entity with automatic trait implementations
///
/// Every declared field becomes `Option<T>`; many-to-many fields become
/// `Vec<EntityRef>`. JSON uses camelCase keys and missing keys default to
/// empty values.
///
/// # Example
///
/// ```rust,ignore
/// use saha::prelude::*;
///
/// impl_resource_entity!(
///     Course,
///     "course",
///     "course",
///     {
///         title: String,
///         instructor: EntityRef,
///     },
///     many_to_many: {
///         students: "students" => "student",
///     },
///     reverse: {
///         "syllabus-is-null" => ("syllabus", "course"),
///     }
/// );
///
/// // Usage
/// let course = Course::default().title("Math").instructor(3i64);
/// ```
#[macro_export]
macro_rules! impl_resource_entity {
    (
        $type:ident,
        $entity_name:literal,
        $table_name:literal,
        {
            $( $(#[$field_meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
        $(
            , many_to_many: {
                $( $m2m_field:ident : $m2m_json:literal => $m2m_target:literal ),* $(,)?
            }
        )?
        $(
            , reverse: {
                $( $rev_filter:literal => ($rev_owner:literal, $rev_owner_field:literal) ),* $(,)?
            }
        )?
    ) => {
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $type {
            pub id: Option<i64>,
            $(
                $(#[$field_meta])*
                pub $field: Option<$field_type>,
            )*
            $($(
                pub $m2m_field: Vec<$crate::core::entity::EntityRef>,
            )*)?
        }

        impl PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $crate::core::entity::same_identity(self.id, other.id)
            }
        }

        impl $crate::core::entity::Entity for $type {
            fn entity_name() -> &'static str {
                $entity_name
            }

            fn table_name() -> &'static str {
                $table_name
            }

            fn resource_name() -> &'static str {
                use std::sync::OnceLock;
                static PLURAL: OnceLock<String> = OnceLock::new();
                PLURAL.get_or_init(|| {
                    $crate::core::pluralize::Pluralizer::resource_path($table_name)
                }).as_str()
            }

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn set_id(&mut self, id: Option<i64>) {
                self.id = id;
            }

            fn many_to_many() -> &'static [$crate::core::entity::ManyToMany] {
                &[
                    $($(
                        $crate::core::entity::ManyToMany {
                            field: $m2m_json,
                            target: $m2m_target,
                        },
                    )*)?
                ]
            }

            fn reverse_one_to_one() -> &'static [$crate::core::entity::ReverseOneToOne] {
                &[
                    $($(
                        $crate::core::entity::ReverseOneToOne {
                            filter: $rev_filter,
                            owner: $rev_owner,
                            owner_field: $rev_owner_field,
                        },
                    )*)?
                ]
            }
        }

        // Fluent setters
        impl $type {
            $(
                pub fn $field(mut self, value: impl Into<$field_type>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            $($(
                pub fn $m2m_field<I, R>(mut self, refs: I) -> Self
                where
                    I: IntoIterator<Item = R>,
                    R: Into<$crate::core::entity::EntityRef>,
                {
                    self.$m2m_field = refs.into_iter().map(Into::into).collect();
                    self
                }
            )*)?
        }
    };
}
