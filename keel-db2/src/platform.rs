use keel_core::{Capabilities, CapabilitiesBuilder};

/// Capabilities shared by every database of the DB2 family.
///
/// DB2 based databases reject uncast operands inside string functions, the dictionary casts
/// them to a VARCHAR of `varchar_cast_length` characters when the fragment is written.
pub fn family_capabilities() -> CapabilitiesBuilder {
    Capabilities::builder()
        .numeric_type_name("DECIMAL")
        .bit_type_name("SMALLINT")
        .smallint_type_name("SMALLINT")
        .tinyint_type_name("SMALLINT")
        .long_varbinary_type_name("BLOB")
        .varbinary_type_name("BLOB")
        .substring_function_name("SUBSTR")
        .string_length_function("LENGTH({0})")
        .trim_leading_function("LTRIM({0})")
        .trim_trailing_function("RTRIM({0})")
        .trim_both_function("LTRIM(RTRIM({0}))")
        // FOR UPDATE is ignored below REPEATABLE READ, force the isolation of the statement
        .for_update_clause("FOR UPDATE WITH RR")
        .supports_locking_with_distinct_clause(false)
        .supports_locking_with_multiple_tables(false)
        .supports_locking_with_order_clause(false)
        .supports_locking_with_outer_join(false)
        .supports_locking_with_inner_join(false)
        .supports_locking_with_select_range(true)
        .supports_case_conversion_for_lob(true)
        .requires_auto_commit_for_meta_data(true)
        .requires_alias_for_subselect(true)
        .supports_auto_assign(true)
        .auto_assign_clause("GENERATED BY DEFAULT AS IDENTITY")
        .last_generated_key_query("VALUES(IDENTITY_VAL_LOCAL())")
        // "X CROSS JOIN Y" is not understood, "X JOIN Y ON (1 = 1)" is
        .cross_join_clause("JOIN")
        .requires_condition_for_cross_join(true)
        .varchar_cast_length(1000)
        // DECIMAL columns take a precision
        .remove_fixed_size_type("DECIMAL")
}

/// The databases of the DB2 family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Db2Platform {
    /// DB2 for Linux, Unix and Windows.
    Luw,
    /// DB2 for z/OS (formerly OS/390), its driver reports a `DSN` product version.
    Zos,
    /// DB2 for i (formerly DB2 UDB for AS/400, iSeries).
    ISeries,
    /// Apache Derby, embedded or network server.
    Derby,
}

impl Db2Platform {
    pub const ALL: [Db2Platform; 4] = [
        Db2Platform::Luw,
        Db2Platform::Zos,
        Db2Platform::ISeries,
        Db2Platform::Derby,
    ];

    /// Name under which the platform is registered.
    pub const fn name(self) -> &'static str {
        match self {
            Db2Platform::Luw => "db2",
            Db2Platform::Zos => "db2zos",
            Db2Platform::ISeries => "db2i",
            Db2Platform::Derby => "derby",
        }
    }

    /// Family defaults followed by the overrides of this platform.
    pub fn capabilities(self) -> CapabilitiesBuilder {
        let family = family_capabilities();
        match self {
            Db2Platform::Luw => family
                .platform("DB2")
                .validation_sql("SELECT DISTINCT(CURRENT TIMESTAMP) FROM SYSIBM.SYSTABLES"),
            Db2Platform::Zos => family
                .platform("DB2 for z/OS")
                .validation_sql("SELECT DISTINCT(CURRENT TIMESTAMP) FROM SYSIBM.SYSTABLES")
                .max_column_name_length(30)
                .max_constraint_name_length(18)
                .max_index_name_length(18),
            Db2Platform::ISeries => family
                .platform("DB2 for i")
                .validation_sql("SELECT DISTINCT(CURRENT TIMESTAMP) FROM QSYS2.SYSTABLES")
                .max_column_name_length(30),
            Db2Platform::Derby => family
                .platform("Apache Derby")
                .validation_sql("VALUES 1")
                .supports_locking_with_select_range(false)
                .requires_auto_commit_for_meta_data(false),
        }
    }

    /// Platform from the product name and version reported by the database driver.
    ///
    /// DB2 for z/OS reports itself as plain `DB2`, only its version (`DSN12015`) tells it apart.
    pub fn detect(product_name: &str, product_version: &str) -> Option<Self> {
        let name = product_name.trim().to_ascii_lowercase();
        let version = product_version.trim().to_ascii_uppercase();
        let db2 = name.starts_with("db2");
        if name.contains("derby") {
            Some(Db2Platform::Derby)
        } else if (db2 && version.starts_with("DSN"))
            || name.starts_with("dsn")
            || name.contains("z/os")
            || name.contains("os/390")
        {
            Some(Db2Platform::Zos)
        } else if (db2 && version.starts_with("QSQ"))
            || name.contains("as/400")
            || name.contains("iseries")
            || (db2 && name.ends_with(" i"))
        {
            Some(Db2Platform::ISeries)
        } else if db2 {
            Some(Db2Platform::Luw)
        } else {
            None
        }
    }
}
