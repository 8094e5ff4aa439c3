use crate::{Context, Error, Result, Template};
use std::{borrow::Cow, collections::BTreeSet};

/// Type names that never carry a size or a precision in a column declaration.
pub const FIXED_SIZE_TYPE_NAMES: &[&str] = &[
    "BIGINT",
    "BIT",
    "BLOB",
    "BOOLEAN",
    "CLOB",
    "DATE",
    "DECIMAL",
    "DISTINCT",
    "DOUBLE",
    "FLOAT",
    "INTEGER",
    "JAVA_OBJECT",
    "NULL",
    "NUMERIC",
    "OTHER",
    "REAL",
    "REF",
    "SMALLINT",
    "STRUCT",
    "TIME",
    "TIMESTAMP",
    "TINYINT",
];

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::msg(format!(
            "Capability `{}` expects a boolean, found `{}`",
            name, value
        ))),
    }
}

macro_rules! capabilities {
    (
        flags { $($(#[$flag_doc:meta])* $flag:ident = $flag_default:expr,)* }
        texts { $($(#[$text_doc:meta])* $text:ident = $text_default:expr,)* }
        templates { $($(#[$template_doc:meta])* $template:ident = $template_default:expr,)* }
        lengths { $($(#[$length_doc:meta])* $length:ident = $length_default:expr,)* }
    ) => {
        /// Vendor capability descriptor.
        ///
        /// Built once through [`CapabilitiesBuilder`] and read only afterwards: there is no way to
        /// change a value once `build` returned, so a dictionary can be shared between threads
        /// as soon as it is constructed.
        #[derive(Debug, Clone, PartialEq)]
        pub struct Capabilities {
            $($flag: bool,)*
            $($text: Cow<'static, str>,)*
            $($template: Template,)*
            $($length: u32,)*
            fixed_size_type_names: BTreeSet<Cow<'static, str>>,
        }

        impl Default for Capabilities {
            fn default() -> Self {
                Self {
                    $($flag: $flag_default,)*
                    $($text: Cow::Borrowed($text_default),)*
                    $($template: Template::new_static($template_default),)*
                    $($length: $length_default,)*
                    fixed_size_type_names: FIXED_SIZE_TYPE_NAMES
                        .iter()
                        .map(|v| Cow::Borrowed(*v))
                        .collect(),
                }
            }
        }

        impl Capabilities {
            $(
                $(#[$flag_doc])*
                pub fn $flag(&self) -> bool {
                    self.$flag
                }
            )*
            $(
                $(#[$text_doc])*
                pub fn $text(&self) -> &str {
                    &self.$text
                }
            )*
            $(
                $(#[$template_doc])*
                pub fn $template(&self) -> &Template {
                    &self.$template
                }
            )*
            $(
                $(#[$length_doc])*
                pub fn $length(&self) -> u32 {
                    self.$length
                }
            )*

            /// Names accepted by [`CapabilitiesBuilder::set_property`].
            pub fn property_names() -> &'static [&'static str] {
                &[
                    $(stringify!($flag),)*
                    $(stringify!($text),)*
                    $(stringify!($template),)*
                    $(stringify!($length),)*
                ]
            }
        }

        impl CapabilitiesBuilder {
            $(
                pub fn $flag(mut self, value: bool) -> Self {
                    self.inner.$flag = value;
                    self
                }
            )*
            $(
                pub fn $text(mut self, value: impl Into<Cow<'static, str>>) -> Self {
                    self.inner.$text = value.into();
                    self
                }
            )*
            $(
                pub fn $template(mut self, value: impl Into<Template>) -> Self {
                    self.inner.$template = value.into();
                    self
                }
            )*
            $(
                pub fn $length(mut self, value: u32) -> Self {
                    self.inner.$length = value;
                    self
                }
            )*

            /// Override a capability by name, parsing the value from its textual form.
            pub fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
                match name {
                    $(stringify!($flag) => self.inner.$flag = parse_flag(name, value)?,)*
                    $(stringify!($text) => self.inner.$text = Cow::Owned(value.to_string()),)*
                    $(stringify!($template) => {
                        self.inner.$template = Template::new(value.to_string())
                    })*
                    $(stringify!($length) => {
                        self.inner.$length = value.trim().parse::<u32>().with_context(|| {
                            format!("Capability `{}` expects an integer, found `{}`", name, value)
                        })?
                    })*
                    _ => {
                        return Err(Error::msg(format!("Unknown capability `{}`", name)));
                    }
                }
                Ok(())
            }
        }
    };
}

capabilities! {
    flags {
        supports_select_for_update = true,
        supports_locking_with_distinct_clause = true,
        supports_locking_with_multiple_tables = true,
        supports_locking_with_order_clause = true,
        supports_locking_with_outer_join = true,
        supports_locking_with_inner_join = true,
        supports_locking_with_select_range = true,
        /// Whether UPPER/LOWER can be applied to LOB columns.
        supports_case_conversion_for_lob = false,
        /// Whether metadata queries must run with auto commit enabled.
        requires_auto_commit_for_meta_data = false,
        /// Whether a sub-select in FROM must be given an alias.
        requires_alias_for_subselect = false,
        supports_auto_assign = false,
        /// Whether the cross join keyword must be followed by an always true ON condition.
        requires_condition_for_cross_join = false,
    }
    texts {
        platform = "Generic",
        validation_sql = "SELECT 1",
        numeric_type_name = "NUMERIC",
        bit_type_name = "BIT",
        smallint_type_name = "SMALLINT",
        tinyint_type_name = "TINYINT",
        integer_type_name = "INTEGER",
        bigint_type_name = "BIGINT",
        real_type_name = "REAL",
        double_type_name = "DOUBLE",
        char_type_name = "CHAR",
        varchar_type_name = "VARCHAR",
        clob_type_name = "CLOB",
        blob_type_name = "BLOB",
        varbinary_type_name = "VARBINARY",
        long_varbinary_type_name = "LONGVARBINARY",
        date_type_name = "DATE",
        time_type_name = "TIME",
        timestamp_type_name = "TIMESTAMP",
        substring_function_name = "SUBSTRING",
        for_update_clause = "FOR UPDATE",
        cross_join_clause = "CROSS JOIN",
        /// Appended to the declaration of auto assigned columns.
        auto_assign_clause = "",
        /// Query returning the last generated identity value, empty when not available.
        last_generated_key_query = "",
    }
    templates {
        string_length_function = "CHAR_LENGTH({0})",
        concatenate_function = "({0} || {1})",
        trim_leading_function = "TRIM(LEADING FROM {0})",
        trim_trailing_function = "TRIM(TRAILING FROM {0})",
        trim_both_function = "TRIM(BOTH FROM {0})",
        to_upper_case_function = "UPPER({0})",
        to_lower_case_function = "LOWER({0})",
    }
    lengths {
        /// Size of the VARCHAR expressions are cast to when the vendor rejects uncast operands.
        varchar_cast_length = 1000,
        /// Length used for VARCHAR columns declared without one.
        default_varchar_length = 255,
        max_table_name_length = 128,
        max_column_name_length = 128,
        max_constraint_name_length = 128,
        max_index_name_length = 128,
    }
}

impl Capabilities {
    pub fn builder() -> CapabilitiesBuilder {
        CapabilitiesBuilder::new()
    }

    /// Start a new builder from these values, to derive a more specialized descriptor.
    pub fn to_builder(&self) -> CapabilitiesBuilder {
        CapabilitiesBuilder {
            inner: self.clone(),
        }
    }

    /// Whether a column of this type is declared without size or precision.
    pub fn is_fixed_size_type(&self, type_name: &str) -> bool {
        self.fixed_size_type_names
            .contains(type_name.to_ascii_uppercase().as_str())
    }

    pub fn fixed_size_type_names(&self) -> impl Iterator<Item = &str> {
        self.fixed_size_type_names.iter().map(AsRef::as_ref)
    }
}

/// Layered construction of [`Capabilities`], later writes win.
#[derive(Default, Debug, Clone)]
pub struct CapabilitiesBuilder {
    inner: Capabilities,
}

impl CapabilitiesBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_fixed_size_type(mut self, type_name: impl Into<Cow<'static, str>>) -> Self {
        let type_name: Cow<'static, str> = type_name.into();
        self.inner
            .fixed_size_type_names
            .insert(Cow::Owned(type_name.to_ascii_uppercase()));
        self
    }

    pub fn remove_fixed_size_type(mut self, type_name: &str) -> Self {
        self.inner
            .fixed_size_type_names
            .remove(type_name.to_ascii_uppercase().as_str());
        self
    }

    pub fn build(self) -> Capabilities {
        self.inner
    }
}
