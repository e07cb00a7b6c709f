//! Keyword table used by the lexer and the grammar.
//!
//! A word in the table lexes as a keyword rather than an identifier. Keywords
//! that MySQL also reserves can never stand in for a name; the others are
//! accepted wherever the grammar expects an identifier, so `comment TEXT` or
//! `status ENUM(...)` still parse as column definitions.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DdlError, Result};

/// Words recognized by the DDL grammar.
const GRAMMAR_KEYWORDS: &[&str] = &[
    "ACTION", "ADD", "AFTER", "ALGORITHM", "ALL", "ALTER", "ALWAYS", "ANALYZE", "AND", "ANY",
    "AS", "ASC", "AUTOEXTEND_SIZE", "AUTO_INCREMENT", "AVG_ROW_LENGTH", "BETWEEN", "BTREE", "BY",
    "CASCADE", "CHANGE", "CHARACTER", "CHARSET", "CHECK", "CHECKSUM", "COALESCE", "COLLATE",
    "COLUMN", "COLUMNS", "COLUMN_FORMAT", "COMMENT", "COMPACT", "COMPRESSED", "COMPRESSION",
    "CONNECTION", "CONSTRAINT", "CONVERT", "COPY", "CREATE", "DATA", "DEFAULT",
    "DELAY_KEY_WRITE", "DELETE", "DESC", "DIRECTORY", "DISABLE", "DISCARD", "DISK", "DISTINCT",
    "DROP", "DYNAMIC", "ENABLE", "ENCRYPTION", "ENFORCED", "ENGINE", "ENGINE_ATTRIBUTE",
    "EXCEPT", "EXCLUSIVE", "EXISTS", "FALSE", "FIRST", "FOREIGN", "FROM", "FULL", "FULLTEXT",
    "GENERATED", "GROUP", "HASH", "HAVING", "IF", "IMPORT", "IN", "INDEX", "INPLACE",
    "INSERT_METHOD", "INSTANT", "INTERSECT", "INVISIBLE", "IS", "KEY", "KEY_BLOCK_SIZE", "LAST",
    "LESS", "LIKE", "LIMIT", "LINEAR", "LIST", "LOCK", "MATCH", "MAXVALUE", "MAX_ROWS", "MEMORY",
    "MINUS", "MIN_ROWS", "MODIFY", "NO", "NONE", "NOT", "NULL", "OFFSET", "ON", "OPTIMIZE", "OR",
    "ORDER", "PACK_KEYS", "PARSER", "PARTIAL", "PARTITION", "PARTITIONING", "PARTITIONS",
    "PASSWORD", "PRIMARY", "RANGE", "REBUILD", "REDUNDANT", "REFERENCES", "REMOVE", "RENAME",
    "REORGANIZE", "REPAIR", "RESTRICT", "ROW_FORMAT", "SECONDARY_ENGINE_ATTRIBUTE", "SELECT",
    "SET", "SHARED", "SIMPLE", "SOME", "SPATIAL", "STATS_AUTO_RECALC", "STATS_PERSISTENT",
    "STATS_SAMPLE_PAGES", "STORAGE", "STORED", "SUBPARTITION", "SUBPARTITIONS", "TABLE",
    "TABLESPACE", "TEMPORARY", "THAN", "TO", "TOP", "TRUE", "TRUNCATE", "TYPE", "UNION",
    "UNIQUE", "UPDATE", "USING", "VALIDATION", "VALUES", "VIEW", "VIRTUAL", "VISIBLE", "WHERE",
    "WITH", "WITHOUT",
    // time functions
    "CURRENT_TIMESTAMP", "LOCALTIME", "LOCALTIMESTAMP", "NOW",
    // data types
    "BIGINT", "BINARY", "BIT", "BLOB", "BOOL", "BOOLEAN", "BYTE", "CHAR", "DATE", "DATETIME",
    "DEC", "DECIMAL", "DOUBLE", "ENUM", "FIXED", "FLOAT", "GEOMETRY", "GEOMETRYCOLLECTION",
    "INT", "INTEGER", "JSON", "LINESTRING", "LONGBLOB", "LONGTEXT", "MEDIUMBLOB", "MEDIUMINT",
    "MEDIUMTEXT", "MULTILINESTRING", "MULTIPOINT", "MULTIPOLYGON", "NATIONAL", "NCHAR",
    "NUMERIC", "POINT", "POLYGON", "PRECISION", "REAL", "SMALLINT", "TEXT", "TIME", "TIMESTAMP",
    "TINYBLOB", "TINYINT", "TINYTEXT", "UNSIGNED", "VARBINARY", "VARCHAR", "YEAR", "ZEROFILL",
];

/// MySQL 8.0 reserved words.
const MYSQL_RESERVED: &[&str] = &[
    "ACCESSIBLE", "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC", "ASENSITIVE", "BEFORE",
    "BETWEEN", "BIGINT", "BINARY", "BLOB", "BOTH", "BY", "CALL", "CASCADE", "CASE", "CHANGE",
    "CHAR", "CHARACTER", "CHECK", "COLLATE", "COLUMN", "CONDITION", "CONSTRAINT", "CONTINUE",
    "CONVERT", "CREATE", "CROSS", "CUBE", "CUME_DIST", "CURRENT_DATE", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR", "DATABASE", "DATABASES", "DAY_HOUR",
    "DAY_MICROSECOND", "DAY_MINUTE", "DAY_SECOND", "DEC", "DECIMAL", "DECLARE", "DEFAULT",
    "DELAYED", "DELETE", "DENSE_RANK", "DESC", "DESCRIBE", "DETERMINISTIC", "DISTINCT",
    "DISTINCTROW", "DIV", "DOUBLE", "DROP", "DUAL", "EACH", "ELSE", "ELSEIF", "EMPTY",
    "ENCLOSED", "ESCAPED", "EXCEPT", "EXISTS", "EXIT", "EXPLAIN", "FALSE", "FETCH",
    "FIRST_VALUE", "FLOAT", "FLOAT4", "FLOAT8", "FOR", "FORCE", "FOREIGN", "FROM", "FULLTEXT",
    "FUNCTION", "GENERATED", "GET", "GRANT", "GROUP", "GROUPING", "GROUPS", "HAVING",
    "HIGH_PRIORITY", "HOUR_MICROSECOND", "HOUR_MINUTE", "HOUR_SECOND", "IF", "IGNORE", "IN",
    "INDEX", "INFILE", "INNER", "INOUT", "INSENSITIVE", "INSERT", "INT", "INT1", "INT2", "INT3",
    "INT4", "INT8", "INTEGER", "INTERSECT", "INTERVAL", "INTO", "IO_AFTER_GTIDS",
    "IO_BEFORE_GTIDS", "IS", "ITERATE", "JOIN", "JSON_TABLE", "KEY", "KEYS", "KILL", "LAG",
    "LAST_VALUE", "LATERAL", "LEAD", "LEADING", "LEAVE", "LEFT", "LIKE", "LIMIT", "LINEAR",
    "LINES", "LOAD", "LOCALTIME", "LOCALTIMESTAMP", "LOCK", "LONG", "LONGBLOB", "LONGTEXT",
    "LOOP", "LOW_PRIORITY", "MASTER_BIND", "MASTER_SSL_VERIFY_SERVER_CERT", "MATCH", "MAXVALUE",
    "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT", "MIDDLEINT", "MINUTE_MICROSECOND", "MINUTE_SECOND",
    "MOD", "MODIFIES", "NATURAL", "NOT", "NO_WRITE_TO_BINLOG", "NTH_VALUE", "NTILE", "NULL",
    "NUMERIC", "OF", "ON", "OPTIMIZE", "OPTIMIZER_COSTS", "OPTION", "OPTIONALLY", "OR", "ORDER",
    "OUT", "OUTER", "OUTFILE", "OVER", "PARTITION", "PERCENT_RANK", "PRECISION", "PRIMARY",
    "PROCEDURE", "PURGE", "RANGE", "RANK", "READ", "READS", "READ_WRITE", "REAL", "RECURSIVE",
    "REFERENCES", "REGEXP", "RELEASE", "RENAME", "REPEAT", "REPLACE", "REQUIRE", "RESIGNAL",
    "RESTRICT", "RETURN", "REVOKE", "RIGHT", "RLIKE", "ROW", "ROWS", "ROW_NUMBER", "SCHEMA",
    "SCHEMAS", "SECOND_MICROSECOND", "SELECT", "SENSITIVE", "SEPARATOR", "SET", "SHOW",
    "SIGNAL", "SMALLINT", "SPATIAL", "SPECIFIC", "SQL", "SQLEXCEPTION", "SQLSTATE",
    "SQLWARNING", "SQL_BIG_RESULT", "SQL_CALC_FOUND_ROWS", "SQL_SMALL_RESULT", "SSL",
    "STARTING", "STORED", "STRAIGHT_JOIN", "SYSTEM", "TABLE", "TERMINATED", "THEN", "TINYBLOB",
    "TINYINT", "TINYTEXT", "TO", "TRAILING", "TRIGGER", "TRUE", "UNDO", "UNION", "UNIQUE",
    "UNLOCK", "UNSIGNED", "UPDATE", "USAGE", "USE", "USING", "UTC_DATE", "UTC_TIME",
    "UTC_TIMESTAMP", "VALUES", "VARBINARY", "VARCHAR", "VARCHARACTER", "VARYING", "VIRTUAL",
    "WHEN", "WHERE", "WHILE", "WINDOW", "WITH", "WRITE", "XOR", "YEAR_MONTH", "ZEROFILL",
];

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid keyword pattern"))
}

fn mysql_reserved() -> &'static HashSet<&'static str> {
    static RESERVED: OnceLock<HashSet<&'static str>> = OnceLock::new();
    RESERVED.get_or_init(|| MYSQL_RESERVED.iter().copied().collect())
}

/// A deduplicated, case-insensitive keyword table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    words: HashSet<String>,
    reserved: HashSet<String>,
}

impl Keywords {
    /// The default MySQL keyword table.
    pub fn mysql() -> &'static Keywords {
        static DEFAULT: OnceLock<Keywords> = OnceLock::new();
        DEFAULT.get_or_init(|| Keywords::build(GRAMMAR_KEYWORDS.iter().map(|w| w.to_string())))
    }

    /// Build a table from arbitrary words. Every word must look like an
    /// unquoted SQL word; duplicates are folded case-insensitively.
    pub fn from_words<I, S>(words: I) -> Result<Keywords>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut upper = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if !word_pattern().is_match(word) {
                return Err(DdlError::Keywords(format!("invalid keyword '{}'", word)));
            }
            upper.push(word.to_ascii_uppercase());
        }
        Ok(Keywords::build(upper))
    }

    /// A copy of this table with `words` added.
    pub fn extended<I, S>(&self, words: I) -> Result<Keywords>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = Keywords::from_words(words)?;
        Ok(Keywords::build(
            self.words.iter().chain(extra.words.iter()).cloned(),
        ))
    }

    /// Load extra keywords from a file and add them to the default table.
    ///
    /// Words are separated by whitespace or commas; `#` starts a comment
    /// that runs to the end of the line.
    pub fn load(path: impl AsRef<Path>) -> Result<Keywords> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let words: Vec<&str> = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
            .filter(|w| !w.is_empty())
            .collect();
        tracing::debug!(
            path = %path.as_ref().display(),
            count = words.len(),
            "loaded keyword file"
        );
        Keywords::mysql().extended(words)
    }

    fn build(words: impl IntoIterator<Item = String>) -> Keywords {
        let words: HashSet<String> = words.into_iter().collect();
        let reserved = words
            .iter()
            .filter(|w| mysql_reserved().contains(w.as_str()))
            .cloned()
            .collect();
        Keywords { words, reserved }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    /// Whether `word` is a keyword that cannot be used as an unquoted name.
    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(&word.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_table_is_case_insensitive() {
        let kw = Keywords::mysql();
        assert!(kw.is_keyword("create"));
        assert!(kw.is_keyword("Create"));
        assert!(kw.is_keyword("VARCHAR"));
        assert!(!kw.is_keyword("users"));
    }

    #[test]
    fn test_reserved_subset() {
        let kw = Keywords::mysql();
        assert!(kw.is_reserved("key"));
        assert!(kw.is_reserved("SELECT"));
        // keywords MySQL lets you use as names
        assert!(!kw.is_reserved("comment"));
        assert!(!kw.is_reserved("date"));
        assert!(!kw.is_reserved("status"));
        // reserved in MySQL but not a keyword here
        assert!(!kw.is_reserved("join"));
    }

    #[test]
    fn test_from_words_dedups() {
        let kw = Keywords::from_words(["select", "SELECT", "From"]).unwrap();
        assert_eq!(kw.len(), 2);
        assert!(kw.is_keyword("from"));
    }

    #[test]
    fn test_from_words_rejects_bad_shape() {
        let err = Keywords::from_words(["ok", "not-a-word"]).unwrap_err();
        assert!(matches!(err, DdlError::Keywords(_)));
        assert!(Keywords::from_words(["1abc"]).is_err());
    }

    #[test]
    fn test_extended_keeps_base() {
        let kw = Keywords::mysql().extended(["SRID"]).unwrap();
        assert!(kw.is_keyword("srid"));
        assert!(kw.is_keyword("ENGINE"));
        assert_eq!(kw.len(), Keywords::mysql().len() + 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# extra words").unwrap();
        writeln!(file, "SRID, invisible_index").unwrap();
        writeln!(file, "visible  # already present").unwrap();
        let kw = Keywords::load(file.path()).unwrap();
        assert!(kw.is_keyword("SRID"));
        assert!(kw.is_keyword("INVISIBLE_INDEX"));
        assert_eq!(kw.len(), Keywords::mysql().len() + 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Keywords::load(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, DdlError::Io(_)));
    }
}
