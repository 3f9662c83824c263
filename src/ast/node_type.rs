//! The node/token kind taxonomy.
//!
//! One `NodeKind` per token or syntax-node classification: keywords (with
//! their legal abbreviations), operator symbols, literal tokens, preprocessor
//! directives and the synthetic structural kinds the tree builder emits.
//! The table below is the single source of truth; the catalog builds its
//! lookup maps from it once at startup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category flags carried by every kind.
pub(crate) mod flags {
    /// Keyword spelling (reserved or not)
    pub const KW: u8 = 1 << 0;
    /// Reserved keyword; may not be used as an identifier
    pub const RES: u8 = 1 << 1;
    /// Punctuation/operator symbol
    pub const SYM: u8 = 1 << 2;
    /// Synthetic structural node, never produced by the scanner
    pub const STRUCT: u8 = 1 << 3;
    /// Preprocessor directive
    pub const PREPROC: u8 = 1 << 4;
    /// Placeholder kind; a node of this kind must never carry children
    pub const PLACEHOLDER: u8 = 1 << 5;
    /// Hidden-channel token (comments, whitespace)
    pub const NONPRINT: u8 = 1 << 6;
}

use flags::*;

/// One lookup spelling of a kind with its minimum legal abbreviation length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spelling {
    /// Full spelling, uppercase
    pub text: &'static str,
    /// Shortest prefix length that still resolves to this kind
    pub min_len: usize,
}

/// Static table row describing one kind.
#[derive(Debug, Clone, Copy)]
pub struct KindSpec {
    /// The kind this row describes
    pub kind: NodeKind,
    /// Canonical display text
    pub text: &'static str,
    /// Lookup spellings; empty for kinds never found by text
    pub spellings: &'static [Spelling],
    /// Category flags (see [`flags`])
    pub flags: u8,
}

macro_rules! node_kinds {
    ($( $variant:ident = $id:literal, $text:literal,
         [$( ($sp:literal, $min:literal) ),*], $fl:expr; )+) => {
        /// Classification of a token or syntax-tree node.
        ///
        /// The discriminant is the kind's stable numeric id.
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[allow(missing_docs)]
        pub enum NodeKind {
            $( $variant = $id, )+
        }

        pub(crate) static KIND_TABLE: &[KindSpec] = &[
            $( KindSpec {
                kind: NodeKind::$variant,
                text: $text,
                spellings: &[$( Spelling { text: $sp, min_len: $min } ),*],
                flags: $fl,
            }, )+
        ];
    };
}

node_kinds! {
    // Sentinels and scanner channel kinds
    Invalid = 0, "<invalid>", [], PLACEHOLDER;
    EndOfFile = 1, "<eof>", [], 0;
    Comment = 2, "<comment>", [], NONPRINT;
    WhiteSpace = 3, "<whitespace>", [], NONPRINT;
    NewLine = 4, "<newline>", [], NONPRINT;
    QuotedString = 5, "<quoted-string>", [], 0;
    NumberLiteral = 6, "<number>", [], 0;
    Identifier = 7, "<id>", [], 0;
    Filename = 8, "<filename>", [], 0;
    UnknownLiteral = 9, "?", [("?", 1)], SYM;

    // Operator and punctuation symbols
    Plus = 20, "+", [("+", 1)], SYM;
    Minus = 21, "-", [("-", 1)], SYM;
    Star = 22, "*", [("*", 1)], SYM;
    Slash = 23, "/", [("/", 1)], SYM;
    Caret = 24, "^", [("^", 1)], SYM;
    EqualSign = 25, "=", [("=", 1)], SYM;
    GreaterThanSym = 26, ">", [(">", 1)], SYM;
    LessThanSym = 27, "<", [("<", 1)], SYM;
    GreaterEqualSym = 28, ">=", [(">=", 2)], SYM;
    LessEqualSym = 29, "<=", [("<=", 2)], SYM;
    GreaterLessSym = 30, "<>", [("<>", 2)], SYM;
    LeftParen = 31, "(", [("(", 1)], SYM;
    RightParen = 32, ")", [(")", 1)], SYM;
    LeftBracket = 33, "[", [("[", 1)], SYM;
    RightBracket = 34, "]", [("]", 1)], SYM;
    LeftCurly = 35, "{", [("{", 1)], SYM;
    RightCurly = 36, "}", [("}", 1)], SYM;
    Comma = 37, ",", [(",", 1)], SYM;
    Period = 38, ".", [(".", 1)], SYM;
    Colon = 39, ":", [(":", 1)], SYM;
    // Member-access colon; scanner emits Colon, the parser retags it, so no
    // lookup spelling of its own.
    ObjColon = 40, ":", [], SYM;
    DoubleColon = 41, "::", [("::", 2)], SYM;
    Semicolon = 42, ";", [(";", 1)], SYM;
    Tilde = 43, "~", [("~", 1)], SYM;
    Exclamation = 44, "!", [("!", 1)], SYM;
    Pipe = 45, "|", [("|", 1)], SYM;
    LexAt = 46, "@", [("@", 1)], SYM;
    Ampersand = 47, "&", [("&", 1)], SYM;
    SingleQuote = 48, "'", [("'", 1)], SYM;
    DoubleQuote = 49, "\"", [("\"", 1)], SYM;
    BackSlash = 50, "\\", [("\\", 1)], SYM;

    // Preprocessor directives
    PreprocGlobalDefine = 60, "&GLOBAL-DEFINE", [("&GLOBAL-DEFINE", 7)], PREPROC;
    PreprocScopedDefine = 61, "&SCOPED-DEFINE", [("&SCOPED-DEFINE", 7)], PREPROC;
    PreprocUndefine = 62, "&UNDEFINE", [("&UNDEFINE", 9)], PREPROC;
    PreprocIf = 63, "&IF", [("&IF", 3)], PREPROC;
    PreprocThen = 64, "&THEN", [("&THEN", 5)], PREPROC;
    PreprocElse = 65, "&ELSE", [("&ELSE", 5)], PREPROC;
    PreprocElseIf = 66, "&ELSEIF", [("&ELSEIF", 7)], PREPROC;
    PreprocEndIf = 67, "&ENDIF", [("&ENDIF", 6)], PREPROC;
    PreprocMessage = 68, "&MESSAGE", [("&MESSAGE", 8)], PREPROC;
    PreprocAnalyzeSuspend = 69, "&ANALYZE-SUSPEND", [("&ANALYZE-SUSPEND", 16)], PREPROC;
    PreprocAnalyzeResume = 70, "&ANALYZE-RESUME", [("&ANALYZE-RESUME", 15)], PREPROC;

    // Keywords: A
    Absolute = 100, "ABSOLUTE", [("ABSOLUTE", 3)], KW;
    Accelerator = 101, "ACCELERATOR", [("ACCELERATOR", 11)], KW;
    Accumulate = 102, "ACCUMULATE", [("ACCUMULATE", 5)], KW | RES;
    ActiveForm = 103, "ACTIVE-FORM", [("ACTIVE-FORM", 11)], KW;
    ActiveWindow = 104, "ACTIVE-WINDOW", [("ACTIVE-WINDOW", 13)], KW;
    AddInterval = 105, "ADD-INTERVAL", [("ADD-INTERVAL", 12)], KW;
    Advise = 106, "ADVISE", [("ADVISE", 6)], KW;
    AlertBox = 107, "ALERT-BOX", [("ALERT-BOX", 9)], KW;
    Alias = 108, "ALIAS", [("ALIAS", 5)], KW;
    All = 109, "ALL", [("ALL", 3)], KW | RES;
    Alter = 110, "ALTER", [("ALTER", 5)], KW | RES;
    Ambiguous = 111, "AMBIGUOUS", [("AMBIGUOUS", 5)], KW | RES;
    Analyze = 112, "ANALYZE", [("ANALYZE", 6)], KW;
    And = 113, "AND", [("AND", 3)], KW | RES;
    Anywhere = 114, "ANYWHERE", [("ANYWHERE", 8)], KW;
    Append = 115, "APPEND", [("APPEND", 6)], KW;
    ApplAlertBoxes = 116, "APPL-ALERT-BOXES", [("APPL-ALERT-BOXES", 10)], KW;
    Apply = 117, "APPLY", [("APPLY", 5)], KW | RES;
    As = 118, "AS", [("AS", 2)], KW | RES;
    Asc = 119, "ASC", [("ASC", 3)], KW;
    Ascending = 120, "ASCENDING", [("ASCENDING", 4)], KW | RES;
    Assign = 121, "ASSIGN", [("ASSIGN", 6)], KW | RES;
    At = 122, "AT", [("AT", 2)], KW | RES;
    Attach = 123, "ATTACH", [("ATTACH", 6)], KW;
    AttrSpace = 124, "ATTR-SPACE", [("ATTR-SPACE", 4)], KW | RES;
    AuditControl = 125, "AUDIT-CONTROL", [("AUDIT-CONTROL", 13)], KW;
    AuditPolicy = 126, "AUDIT-POLICY", [("AUDIT-POLICY", 12)], KW;
    Authorization = 127, "AUTHORIZATION", [("AUTHORIZATION", 13)], KW | RES;
    AutoCompletion = 128, "AUTO-COMPLETION", [("AUTO-COMPLETION", 9)], KW;
    AutoEndkey = 129, "AUTO-ENDKEY", [("AUTO-ENDKEY", 8)], KW;
    AutoGo = 130, "AUTO-GO", [("AUTO-GO", 7)], KW;
    AutoReturn = 131, "AUTO-RETURN", [("AUTO-RETURN", 11)], KW;
    Available = 132, "AVAILABLE", [("AVAILABLE", 5)], KW | RES;
    Average = 133, "AVERAGE", [("AVERAGE", 7)], KW;
    Avg = 134, "AVG", [("AVG", 3)], KW;

    // Keywords: B
    Background = 140, "BACKGROUND", [("BACKGROUND", 4)], KW | RES;
    Backwards = 141, "BACKWARDS", [("BACKWARDS", 9)], KW;
    Base64Decode = 142, "BASE64-DECODE", [("BASE64-DECODE", 13)], KW;
    Base64Encode = 143, "BASE64-ENCODE", [("BASE64-ENCODE", 13)], KW;
    BaseKey = 144, "BASE-KEY", [("BASE-KEY", 8)], KW;
    BeforeHide = 145, "BEFORE-HIDE", [("BEFORE-HIDE", 11)], KW | RES;
    Begins = 146, "BEGINS", [("BEGINS", 6)], KW | RES;
    Bell = 147, "BELL", [("BELL", 4)], KW | RES;
    Between = 148, "BETWEEN", [("BETWEEN", 7)], KW | RES;
    BgColor = 149, "BGCOLOR", [("BGCOLOR", 3)], KW | RES;
    BigEndian = 150, "BIG-ENDIAN", [("BIG-ENDIAN", 10)], KW;
    Binary = 151, "BINARY", [("BINARY", 6)], KW;
    Bind = 152, "BIND", [("BIND", 4)], KW;
    Blank = 153, "BLANK", [("BLANK", 5)], KW | RES;
    Blob = 154, "BLOB", [("BLOB", 4)], KW;
    Both = 155, "BOTH", [("BOTH", 4)], KW;
    Bottom = 156, "BOTTOM", [("BOTTOM", 6)], KW;
    Break = 157, "BREAK", [("BREAK", 5)], KW | RES;
    Browse = 158, "BROWSE", [("BROWSE", 6)], KW | RES;
    Buffer = 159, "BUFFER", [("BUFFER", 6)], KW | RES;
    BufferCompare = 160, "BUFFER-COMPARE", [("BUFFER-COMPARE", 14)], KW | RES;
    BufferCopy = 161, "BUFFER-COPY", [("BUFFER-COPY", 11)], KW | RES;
    BufferGroupId = 162, "BUFFER-GROUP-ID", [("BUFFER-GROUP-ID", 15)], KW;
    Button = 163, "BUTTON", [("BUTTON", 6), ("BUTTONS", 7)], KW;
    By = 164, "BY", [("BY", 2)], KW | RES;
    ByPointer = 165, "BY-POINTER", [("BY-POINTER", 10)], KW | RES;
    ByReference = 166, "BY-REFERENCE", [("BY-REFERENCE", 12)], KW | RES;
    ByValue = 167, "BY-VALUE", [("BY-VALUE", 8)], KW | RES;

    // Keywords: C
    Cache = 180, "CACHE", [("CACHE", 5)], KW;
    CacheSize = 181, "CACHE-SIZE", [("CACHE-SIZE", 10)], KW;
    Call = 182, "CALL", [("CALL", 4)], KW | RES;
    CanDo = 183, "CAN-DO", [("CAN-DO", 6)], KW | RES;
    CanFind = 184, "CAN-FIND", [("CAN-FIND", 8)], KW | RES;
    CanQuery = 185, "CAN-QUERY", [("CAN-QUERY", 9)], KW;
    CanSet = 186, "CAN-SET", [("CAN-SET", 7)], KW;
    CancelButton = 187, "CANCEL-BUTTON", [("CANCEL-BUTTON", 13)], KW;
    Caps = 188, "CAPS", [("CAPS", 4)], KW;
    Case = 189, "CASE", [("CASE", 4)], KW | RES;
    CaseSensitive = 190, "CASE-SENSITIVE", [("CASE-SENSITIVE", 8)], KW | RES;
    Cast = 191, "CAST", [("CAST", 4)], KW | RES;
    Catch = 192, "CATCH", [("CATCH", 5)], KW;
    Centered = 193, "CENTERED", [("CENTERED", 5)], KW | RES;
    Chained = 194, "CHAINED", [("CHAINED", 7)], KW;
    Character = 195, "CHARACTER", [("CHARACTER", 4)], KW;
    Check = 196, "CHECK", [("CHECK", 5)], KW | RES;
    Choose = 197, "CHOOSE", [("CHOOSE", 6)], KW | RES;
    Chr = 198, "CHR", [("CHR", 3)], KW;
    Class = 199, "CLASS", [("CLASS", 5)], KW | RES;
    Clear = 200, "CLEAR", [("CLEAR", 5)], KW | RES;
    ClientPrincipal = 201, "CLIENT-PRINCIPAL", [("CLIENT-PRINCIPAL", 16)], KW;
    Clipboard = 202, "CLIPBOARD", [("CLIPBOARD", 9)], KW;
    Clob = 203, "CLOB", [("CLOB", 4)], KW;
    Close = 204, "CLOSE", [("CLOSE", 5)], KW | RES;
    CodebaseLocator = 205, "CODEBASE-LOCATOR", [("CODEBASE-LOCATOR", 16)], KW;
    Codepage = 206, "CODEPAGE", [("CODEPAGE", 8)], KW;
    CodepageConvert = 207, "CODEPAGE-CONVERT", [("CODEPAGE-CONVERT", 16)], KW;
    Collate = 208, "COLLATE", [("COLLATE", 7)], KW;
    Color = 209, "COLOR", [("COLOR", 5)], KW | RES;
    ColorTable = 210, "COLOR-TABLE", [("COLOR-TABLE", 11)], KW;
    Column = 211, "COLUMN", [("COLUMN", 3)], KW | RES;
    ColumnLabel = 212, "COLUMN-LABEL", [("COLUMN-LABEL", 10)], KW | RES;
    Columns = 213, "COLUMNS", [("COLUMNS", 7)], KW;
    ComHandle = 214, "COM-HANDLE", [("COM-HANDLE", 10)], KW;
    ComboBox = 215, "COMBO-BOX", [("COMBO-BOX", 9)], KW;
    Compile = 216, "COMPILE", [("COMPILE", 7)], KW;
    Compiler = 217, "COMPILER", [("COMPILER", 8)], KW;
    Complete = 218, "COMPLETE", [("COMPLETE", 8)], KW;
    ConfigName = 219, "CONFIG-NAME", [("CONFIG-NAME", 11)], KW;
    Connect = 220, "CONNECT", [("CONNECT", 7)], KW;
    Connected = 221, "CONNECTED", [("CONNECTED", 9)], KW;
    Constructor = 222, "CONSTRUCTOR", [("CONSTRUCTOR", 11)], KW;
    Contains = 223, "CONTAINS", [("CONTAINS", 8)], KW | RES;
    Contents = 224, "CONTENTS", [("CONTENTS", 8)], KW;
    Context = 225, "CONTEXT", [("CONTEXT", 7)], KW;
    Control = 226, "CONTROL", [("CONTROL", 7)], KW | RES;
    Convert = 227, "CONVERT", [("CONVERT", 7)], KW;
    CopyLob = 228, "COPY-LOB", [("COPY-LOB", 8)], KW;
    Count = 229, "COUNT", [("COUNT", 5)], KW;
    CountOf = 230, "COUNT-OF", [("COUNT-OF", 8)], KW | RES;
    Create = 231, "CREATE", [("CREATE", 6)], KW | RES;
    Current = 232, "CURRENT", [("CURRENT", 7)], KW;
    CurrentChanged = 233, "CURRENT-CHANGED", [("CURRENT-CHANGED", 15)], KW | RES;
    CurrentLanguage = 234, "CURRENT-LANGUAGE", [("CURRENT-LANGUAGE", 12)], KW | RES;
    CurrentValue = 235, "CURRENT-VALUE", [("CURRENT-VALUE", 13)], KW;
    CurrentWindow = 236, "CURRENT-WINDOW", [("CURRENT-WINDOW", 14)], KW;
    Cursor = 237, "CURSOR", [("CURSOR", 6)], KW | RES;

    // Keywords: D
    Database = 250, "DATABASE", [("DATABASE", 8)], KW | RES;
    Dataset = 251, "DATASET", [("DATASET", 7)], KW | RES;
    DatasetHandle = 252, "DATASET-HANDLE", [("DATASET-HANDLE", 14)], KW;
    DataBind = 253, "DATA-BIND", [("DATA-BIND", 9)], KW;
    DataRelation = 254, "DATA-RELATION", [("DATA-RELATION", 11)], KW;
    DataSource = 255, "DATA-SOURCE", [("DATA-SOURCE", 11)], KW;
    DataSourceModified = 256, "DATA-SOURCE-MODIFIED", [("DATA-SOURCE-MODIFIED", 20)], KW;
    Date = 257, "DATE", [("DATE", 4)], KW;
    Datetime = 258, "DATETIME", [("DATETIME", 8)], KW;
    DatetimeTz = 259, "DATETIME-TZ", [("DATETIME-TZ", 11)], KW;
    Day = 260, "DAY", [("DAY", 3)], KW;
    DbName = 261, "DBNAME", [("DBNAME", 6)], KW | RES;
    DbType = 262, "DBTYPE", [("DBTYPE", 6)], KW;
    Dde = 263, "DDE", [("DDE", 3)], KW | RES;
    Deblank = 264, "DEBLANK", [("DEBLANK", 7)], KW;
    Debug = 265, "DEBUG", [("DEBUG", 5)], KW;
    DebugList = 266, "DEBUG-LIST", [("DEBUG-LIST", 10)], KW | RES;
    Debugger = 267, "DEBUGGER", [("DEBUGGER", 8)], KW;
    Decimal = 268, "DECIMAL", [("DECIMAL", 3)], KW;
    Decimals = 269, "DECIMALS", [("DECIMALS", 8)], KW | RES;
    Decrypt = 270, "DECRYPT", [("DECRYPT", 7)], KW;
    Default = 271, "DEFAULT", [("DEFAULT", 7)], KW | RES;
    DefaultButton = 272, "DEFAULT-BUTTON", [("DEFAULT-BUTTON", 11)], KW;
    Define = 273, "DEFINE", [("DEFINE", 3)], KW | RES;
    Defined = 274, "DEFINED", [("DEFINED", 7)], KW;
    Delete = 275, "DELETE", [("DELETE", 3)], KW | RES;
    Descending = 276, "DESCENDING", [("DESCENDING", 4)], KW | RES;
    Deselect = 277, "DESELECT", [("DESELECT", 8)], KW;
    Destructor = 278, "DESTRUCTOR", [("DESTRUCTOR", 10)], KW;
    DialogBox = 279, "DIALOG-BOX", [("DIALOG-BOX", 10)], KW | RES;
    Dictionary = 280, "DICTIONARY", [("DICTIONARY", 4)], KW | RES;
    Disable = 281, "DISABLE", [("DISABLE", 7)], KW | RES;
    Disconnect = 282, "DISCONNECT", [("DISCONNECT", 6)], KW | RES;
    Display = 283, "DISPLAY", [("DISPLAY", 4)], KW | RES;
    Distinct = 284, "DISTINCT", [("DISTINCT", 8)], KW | RES;
    Do = 285, "DO", [("DO", 2)], KW | RES;
    Dos = 286, "DOS", [("DOS", 3)], KW | RES;
    Double = 287, "DOUBLE", [("DOUBLE", 6)], KW;
    Down = 288, "DOWN", [("DOWN", 4)], KW | RES;
    Drop = 289, "DROP", [("DROP", 4)], KW | RES;
    DropDown = 290, "DROP-DOWN", [("DROP-DOWN", 9)], KW;
    DropFileNotify = 291, "DROP-FILE-NOTIFY", [("DROP-FILE-NOTIFY", 16)], KW;
    DsLogManager = 292, "DSLOG-MANAGER", [("DSLOG-MANAGER", 13)], KW;
    Dump = 293, "DUMP", [("DUMP", 4)], KW;
    DynamicCast = 294, "DYNAMIC-CAST", [("DYNAMIC-CAST", 12)], KW;
    DynamicFunction = 295, "DYNAMIC-FUNCTION", [("DYNAMIC-FUNCTION", 12)], KW | RES;
    DynamicInvoke = 296, "DYNAMIC-INVOKE", [("DYNAMIC-INVOKE", 14)], KW;
    DynamicNew = 297, "DYNAMIC-NEW", [("DYNAMIC-NEW", 11)], KW;

    // Keywords: E
    Each = 310, "EACH", [("EACH", 4)], KW | RES;
    EdgeChars = 311, "EDGE-CHARS", [("EDGE-CHARS", 4)], KW;
    Editing = 312, "EDITING", [("EDITING", 7)], KW | RES;
    Editor = 313, "EDITOR", [("EDITOR", 6)], KW;
    Else = 314, "ELSE", [("ELSE", 4)], KW | RES;
    Empty = 315, "EMPTY", [("EMPTY", 5)], KW;
    Enable = 316, "ENABLE", [("ENABLE", 6)], KW | RES;
    Encode = 317, "ENCODE", [("ENCODE", 6)], KW;
    Encrypt = 318, "ENCRYPT", [("ENCRYPT", 7)], KW;
    End = 319, "END", [("END", 3)], KW | RES;
    Endkey = 320, "ENDKEY", [("ENDKEY", 6)], KW;
    Entered = 321, "ENTERED", [("ENTERED", 7)], KW;
    Entry = 322, "ENTRY", [("ENTRY", 5)], KW | RES;
    Enum = 323, "ENUM", [("ENUM", 4)], KW;
    Eq = 324, "EQ", [("EQ", 2)], KW | RES;
    Error = 325, "ERROR", [("ERROR", 5)], KW | RES;
    ErrorStatus = 326, "ERROR-STATUS", [("ERROR-STATUS", 10)], KW;
    Escape = 327, "ESCAPE", [("ESCAPE", 6)], KW | RES;
    Etime = 328, "ETIME", [("ETIME", 5)], KW | RES;
    Event = 329, "EVENT", [("EVENT", 5)], KW;
    EventProcedure = 330, "EVENT-PROCEDURE", [("EVENT-PROCEDURE", 10)], KW;
    Except = 331, "EXCEPT", [("EXCEPT", 6)], KW | RES;
    ExclusiveLock = 332, "EXCLUSIVE-LOCK", [("EXCLUSIVE-LOCK", 9), ("EXCLUSIVE", 9)], KW | RES;
    Execute = 333, "EXECUTE", [("EXECUTE", 7)], KW;
    Exp = 334, "EXP", [("EXP", 3)], KW;
    Expand = 335, "EXPAND", [("EXPAND", 6)], KW;
    Export = 336, "EXPORT", [("EXPORT", 6)], KW | RES;
    Extended = 337, "EXTENDED", [("EXTENDED", 8)], KW;
    Extent = 338, "EXTENT", [("EXTENT", 6)], KW;
    External = 339, "EXTERNAL", [("EXTERNAL", 8)], KW;

    // Keywords: F
    False = 350, "FALSE", [("FALSE", 5)], KW | RES;
    Fetch = 351, "FETCH", [("FETCH", 5)], KW | RES;
    FgColor = 352, "FGCOLOR", [("FGCOLOR", 3)], KW | RES;
    Field = 353, "FIELD", [("FIELD", 5)], KW | RES;
    Fields = 354, "FIELDS", [("FIELDS", 6)], KW | RES;
    File = 355, "FILE", [("FILE", 4)], KW;
    FileInfo = 356, "FILE-INFORMATION", [("FILE-INFORMATION", 9)], KW;
    Fill = 357, "FILL", [("FILL", 4)], KW;
    FillIn = 358, "FILL-IN", [("FILL-IN", 7)], KW;
    Final = 359, "FINAL", [("FINAL", 5)], KW;
    Finally = 360, "FINALLY", [("FINALLY", 7)], KW;
    Find = 361, "FIND", [("FIND", 4)], KW | RES;
    FindCaseSensitive = 362, "FIND-CASE-SENSITIVE", [("FIND-CASE-SENSITIVE", 19)], KW | RES;
    First = 363, "FIRST", [("FIRST", 5)], KW | RES;
    FirstOf = 364, "FIRST-OF", [("FIRST-OF", 8)], KW | RES;
    FitLastColumn = 365, "FIT-LAST-COLUMN", [("FIT-LAST-COLUMN", 15)], KW;
    FixedOnly = 366, "FIXED-ONLY", [("FIXED-ONLY", 10)], KW;
    FlatButton = 367, "FLAT-BUTTON", [("FLAT-BUTTON", 11)], KW;
    Focus = 368, "FOCUS", [("FOCUS", 5)], KW | RES;
    Font = 369, "FONT", [("FONT", 4)], KW | RES;
    FontTable = 370, "FONT-TABLE", [("FONT-TABLE", 10)], KW;
    For = 371, "FOR", [("FOR", 3)], KW | RES;
    ForceFile = 372, "FORCE-FILE", [("FORCE-FILE", 10)], KW;
    Form = 373, "FORM", [("FORM", 4)], KW | RES;
    Format = 374, "FORMAT", [("FORMAT", 5)], KW | RES;
    Forward = 375, "FORWARD", [("FORWARD", 7)], KW;
    Frame = 376, "FRAME", [("FRAME", 4)], KW | RES;
    FrameCol = 377, "FRAME-COL", [("FRAME-COL", 9)], KW | RES;
    FrameDb = 378, "FRAME-DB", [("FRAME-DB", 8)], KW | RES;
    FrameDown = 379, "FRAME-DOWN", [("FRAME-DOWN", 10)], KW | RES;
    FrameField = 380, "FRAME-FIELD", [("FRAME-FIELD", 11)], KW | RES;
    FrameFile = 381, "FRAME-FILE", [("FRAME-FILE", 10)], KW | RES;
    FrameIndex = 382, "FRAME-INDEX", [("FRAME-INDEX", 11)], KW | RES;
    FrameLine = 383, "FRAME-LINE", [("FRAME-LINE", 10)], KW | RES;
    FrameName = 384, "FRAME-NAME", [("FRAME-NAME", 10)], KW | RES;
    FrameRow = 385, "FRAME-ROW", [("FRAME-ROW", 9)], KW | RES;
    FrameValue = 386, "FRAME-VALUE", [("FRAME-VALUE", 11)], KW | RES;
    From = 387, "FROM", [("FROM", 4)], KW | RES;
    Function = 388, "FUNCTION", [("FUNCTION", 8)], KW | RES;

    // Keywords: G
    Gateways = 400, "GATEWAYS", [("GATEWAYS", 7)], KW | RES;
    Ge = 401, "GE", [("GE", 2)], KW | RES;
    Get = 402, "GET", [("GET", 3)], KW | RES;
    GetBuffer = 403, "GET-BUFFER-HANDLE", [("GET-BUFFER-HANDLE", 17)], KW;
    GetByte = 404, "GET-BYTE", [("GET-BYTE", 8)], KW;
    GetBytes = 405, "GET-BYTES", [("GET-BYTES", 9)], KW;
    GetClass = 406, "GET-CLASS", [("GET-CLASS", 9)], KW;
    GetCodepage = 407, "GET-CODEPAGE", [("GET-CODEPAGE", 12)], KW;
    GetDir = 408, "GET-DIR", [("GET-DIR", 7)], KW;
    GetDouble = 409, "GET-DOUBLE", [("GET-DOUBLE", 10)], KW;
    GetFile = 410, "GET-FILE", [("GET-FILE", 8)], KW;
    GetFloat = 411, "GET-FLOAT", [("GET-FLOAT", 9)], KW;
    GetKeyValue = 412, "GET-KEY-VALUE", [("GET-KEY-VALUE", 13)], KW | RES;
    GetLong = 413, "GET-LONG", [("GET-LONG", 8)], KW;
    GetPointerValue = 414, "GET-POINTER-VALUE", [("GET-POINTER-VALUE", 17)], KW;
    GetShort = 415, "GET-SHORT", [("GET-SHORT", 9)], KW;
    GetSize = 416, "GET-SIZE", [("GET-SIZE", 8)], KW;
    GetString = 417, "GET-STRING", [("GET-STRING", 10)], KW;
    GetUnsignedShort = 418, "GET-UNSIGNED-SHORT", [("GET-UNSIGNED-SHORT", 18)], KW;
    Global = 419, "GLOBAL", [("GLOBAL", 6)], KW | RES;
    GoOn = 420, "GO-ON", [("GO-ON", 5)], KW | RES;
    GoPending = 421, "GO-PENDING", [("GO-PENDING", 8)], KW | RES;
    Group = 422, "GROUP", [("GROUP", 5)], KW | RES;
    Gt = 423, "GT", [("GT", 2)], KW | RES;
    Guid = 424, "GUID", [("GUID", 4)], KW;

    // Keywords: H
    Handle = 435, "HANDLE", [("HANDLE", 6)], KW;
    Having = 436, "HAVING", [("HAVING", 6)], KW | RES;
    Header = 437, "HEADER", [("HEADER", 6)], KW | RES;
    Help = 438, "HELP", [("HELP", 4)], KW | RES;
    HexDecode = 439, "HEX-DECODE", [("HEX-DECODE", 10)], KW;
    HexEncode = 440, "HEX-ENCODE", [("HEX-ENCODE", 10)], KW;
    Hide = 441, "HIDE", [("HIDE", 4)], KW | RES;

    // Keywords: I
    If = 450, "IF", [("IF", 2)], KW | RES;
    Image = 451, "IMAGE", [("IMAGE", 5)], KW;
    Implements = 452, "IMPLEMENTS", [("IMPLEMENTS", 10)], KW;
    Import = 453, "IMPORT", [("IMPORT", 6)], KW | RES;
    In = 454, "IN", [("IN", 2)], KW | RES;
    Index = 455, "INDEX", [("INDEX", 5)], KW | RES;
    Inherits = 456, "INHERITS", [("INHERITS", 8)], KW;
    Initial = 457, "INITIAL", [("INITIAL", 4)], KW | RES;
    Input = 458, "INPUT", [("INPUT", 5)], KW | RES;
    InputOutput = 459, "INPUT-OUTPUT", [("INPUT-OUTPUT", 12)], KW | RES;
    Insert = 460, "INSERT", [("INSERT", 6)], KW | RES;
    Int64 = 461, "INT64", [("INT64", 5)], KW;
    Integer = 462, "INTEGER", [("INTEGER", 3)], KW;
    Interface = 463, "INTERFACE", [("INTERFACE", 9)], KW;
    Interval = 464, "INTERVAL", [("INTERVAL", 8)], KW;
    Into = 465, "INTO", [("INTO", 4)], KW | RES;
    Is = 466, "IS", [("IS", 2)], KW | RES;
    IsAttrSpace = 467, "IS-ATTR-SPACE", [("IS-ATTR-SPACE", 9)], KW | RES;
    IsLeadByte = 468, "IS-LEAD-BYTE", [("IS-LEAD-BYTE", 12)], KW;

    // Keywords: J K
    Join = 480, "JOIN", [("JOIN", 4)], KW | RES;
    Kblabel = 481, "KBLABEL", [("KBLABEL", 7)], KW | RES;
    KeyCode = 482, "KEY-CODE", [("KEY-CODE", 8)], KW;
    KeyFunction = 483, "KEY-FUNCTION", [("KEY-FUNCTION", 8)], KW;
    KeyLabel = 484, "KEY-LABEL", [("KEY-LABEL", 9)], KW;
    Keyword = 485, "KEYWORD", [("KEYWORD", 3)], KW | RES;
    KeywordAll = 486, "KEYWORD-ALL", [("KEYWORD-ALL", 11)], KW;

    // Keywords: L
    Label = 495, "LABEL", [("LABEL", 5)], KW | RES;
    Last = 496, "LAST", [("LAST", 4)], KW | RES;
    LastEvent = 497, "LAST-EVENT", [("LAST-EVENT", 10)], KW;
    LastOf = 498, "LAST-OF", [("LAST-OF", 7)], KW | RES;
    Lastkey = 499, "LASTKEY", [("LASTKEY", 7)], KW | RES;
    Lc = 500, "LC", [("LC", 2)], KW;
    LdbName = 501, "LDBNAME", [("LDBNAME", 7)], KW | RES;
    Le = 502, "LE", [("LE", 2)], KW | RES;
    Leave = 503, "LEAVE", [("LEAVE", 5)], KW | RES;
    LeftTrim = 504, "LEFT-TRIM", [("LEFT-TRIM", 9)], KW;
    Length = 505, "LENGTH", [("LENGTH", 6)], KW | RES;
    Library = 506, "LIBRARY", [("LIBRARY", 7)], KW | RES;
    Like = 507, "LIKE", [("LIKE", 4)], KW | RES;
    ListEvents = 508, "LIST-EVENTS", [("LIST-EVENTS", 11)], KW | RES;
    LittleEndian = 509, "LITTLE-ENDIAN", [("LITTLE-ENDIAN", 13)], KW;
    Locked = 510, "LOCKED", [("LOCKED", 6)], KW | RES;
    Log = 511, "LOG", [("LOG", 3)], KW;
    LogManager = 512, "LOG-MANAGER", [("LOG-MANAGER", 11)], KW;
    Logical = 513, "LOGICAL", [("LOGICAL", 7)], KW;
    Longchar = 514, "LONGCHAR", [("LONGCHAR", 8)], KW;
    Lookup = 515, "LOOKUP", [("LOOKUP", 6)], KW | RES;
    Lt = 516, "LT", [("LT", 2)], KW | RES;

    // Keywords: M
    MachineClass = 530, "MACHINE-CLASS", [("MACHINE-CLASS", 13)], KW | RES;
    Map = 531, "MAP", [("MAP", 3)], KW | RES;
    Matches = 532, "MATCHES", [("MATCHES", 7)], KW | RES;
    Maximum = 533, "MAXIMUM", [("MAXIMUM", 3)], KW;
    Md5Digest = 534, "MD5-DIGEST", [("MD5-DIGEST", 10)], KW;
    Member = 535, "MEMBER", [("MEMBER", 6)], KW;
    Memptr = 536, "MEMPTR", [("MEMPTR", 6)], KW;
    Menu = 537, "MENU", [("MENU", 4)], KW | RES;
    Message = 538, "MESSAGE", [("MESSAGE", 7)], KW | RES;
    MessageLines = 539, "MESSAGE-LINES", [("MESSAGE-LINES", 13)], KW | RES;
    Method = 540, "METHOD", [("METHOD", 6)], KW;
    Minimum = 541, "MINIMUM", [("MINIMUM", 3)], KW;
    Modulo = 542, "MODULO", [("MODULO", 3)], KW | RES;
    Month = 543, "MONTH", [("MONTH", 5)], KW;
    Mtime = 544, "MTIME", [("MTIME", 5)], KW;

    // Keywords: N
    Ne = 555, "NE", [("NE", 2)], KW | RES;
    New = 556, "NEW", [("NEW", 3)], KW | RES;
    Next = 557, "NEXT", [("NEXT", 4)], KW | RES;
    NextPrompt = 558, "NEXT-PROMPT", [("NEXT-PROMPT", 11)], KW | RES;
    No = 559, "NO", [("NO", 2)], KW | RES;
    NoApply = 560, "NO-APPLY", [("NO-APPLY", 8)], KW;
    NoError = 561, "NO-ERROR", [("NO-ERROR", 8)], KW | RES;
    NoLock = 562, "NO-LOCK", [("NO-LOCK", 7)], KW | RES;
    NoUndo = 563, "NO-UNDO", [("NO-UNDO", 7)], KW | RES;
    Not = 564, "NOT", [("NOT", 3)], KW | RES;
    Now = 565, "NOW", [("NOW", 3)], KW;
    Null = 566, "NULL", [("NULL", 4)], KW;
    NumAliases = 567, "NUM-ALIASES", [("NUM-ALIASES", 9)], KW | RES;
    NumDbs = 568, "NUM-DBS", [("NUM-DBS", 7)], KW | RES;
    NumEntries = 569, "NUM-ENTRIES", [("NUM-ENTRIES", 11)], KW | RES;
    NumResults = 570, "NUM-RESULTS", [("NUM-RESULTS", 11)], KW | RES;
    Numeric = 571, "NUMERIC", [("NUMERIC", 7)], KW;

    // Keywords: O
    Of = 580, "OF", [("OF", 2)], KW | RES;
    Old = 581, "OLD", [("OLD", 3)], KW | RES;
    On = 582, "ON", [("ON", 2)], KW | RES;
    Open = 583, "OPEN", [("OPEN", 4)], KW | RES;
    Opsys = 584, "OPSYS", [("OPSYS", 5)], KW | RES;
    Or = 585, "OR", [("OR", 2)], KW | RES;
    Otherwise = 586, "OTHERWISE", [("OTHERWISE", 9)], KW | RES;
    Output = 587, "OUTPUT", [("OUTPUT", 6)], KW | RES;
    Overlay = 588, "OVERLAY", [("OVERLAY", 7)], KW | RES;
    Override = 589, "OVERRIDE", [("OVERRIDE", 8)], KW;

    // Keywords: P
    PageBottom = 600, "PAGE-BOTTOM", [("PAGE-BOTTOM", 8)], KW | RES;
    PageNumber = 601, "PAGE-NUMBER", [("PAGE-NUMBER", 8)], KW | RES;
    PageSize = 602, "PAGE-SIZE", [("PAGE-SIZE", 9)], KW | RES;
    PageTop = 603, "PAGE-TOP", [("PAGE-TOP", 8)], KW | RES;
    Parameter = 604, "PARAMETER", [("PARAMETER", 5)], KW | RES;
    Pascal = 605, "PASCAL", [("PASCAL", 6)], KW | RES;
    Pause = 606, "PAUSE", [("PAUSE", 5)], KW | RES;
    PdbName = 607, "PDBNAME", [("PDBNAME", 7)], KW | RES;
    Persistent = 608, "PERSISTENT", [("PERSISTENT", 7)], KW | RES;
    Preselect = 609, "PRESELECT", [("PRESELECT", 9)], KW | RES;
    Prev = 610, "PREV", [("PREV", 4)], KW | RES;
    Primary = 611, "PRIMARY", [("PRIMARY", 7)], KW | RES;
    Private = 612, "PRIVATE", [("PRIVATE", 7)], KW | RES;
    Procedure = 613, "PROCEDURE", [("PROCEDURE", 5)], KW | RES;
    ProcessArchitecture = 614, "PROCESS-ARCHITECTURE", [("PROCESS-ARCHITECTURE", 20)], KW;
    Profiler = 615, "PROFILER", [("PROFILER", 8)], KW;
    Progress = 616, "PROGRESS", [("PROGRESS", 8)], KW | RES;
    Promsgs = 617, "PROMSGS", [("PROMSGS", 7)], KW | RES;
    Propath = 618, "PROPATH", [("PROPATH", 7)], KW | RES;
    Property = 619, "PROPERTY", [("PROPERTY", 8)], KW;
    Protected = 620, "PROTECTED", [("PROTECTED", 9)], KW;
    Proversion = 621, "PROVERSION", [("PROVERSION", 10)], KW | RES;
    Public = 622, "PUBLIC", [("PUBLIC", 6)], KW;
    Put = 623, "PUT", [("PUT", 3)], KW | RES;
    PutByte = 624, "PUT-BYTE", [("PUT-BYTE", 8)], KW;

    // Keywords: Q
    Query = 635, "QUERY", [("QUERY", 5)], KW | RES;
    Quit = 636, "QUIT", [("QUIT", 4)], KW | RES;
    Quoter = 637, "QUOTER", [("QUOTER", 6)], KW | RES;

    // Keywords: R
    RIndex = 645, "R-INDEX", [("R-INDEX", 7)], KW | RES;
    Random = 646, "RANDOM", [("RANDOM", 6)], KW | RES;
    Raw = 647, "RAW", [("RAW", 3)], KW;
    RcodeInfo = 648, "RCODE-INFORMATION", [("RCODE-INFORMATION", 10)], KW;
    Readkey = 649, "READKEY", [("READKEY", 7)], KW | RES;
    Recid = 650, "RECID", [("RECID", 5)], KW | RES;
    Release = 651, "RELEASE", [("RELEASE", 7)], KW | RES;
    Repeat = 652, "REPEAT", [("REPEAT", 6)], KW | RES;
    Replace = 653, "REPLACE", [("REPLACE", 7)], KW;
    Retain = 654, "RETAIN", [("RETAIN", 6)], KW | RES;
    Retry = 655, "RETRY", [("RETRY", 5)], KW | RES;
    Return = 656, "RETURN", [("RETURN", 6)], KW | RES;
    ReturnValue = 657, "RETURN-VALUE", [("RETURN-VALUE", 10)], KW | RES;
    Revert = 658, "REVERT", [("REVERT", 6)], KW | RES;
    RightTrim = 659, "RIGHT-TRIM", [("RIGHT-TRIM", 10)], KW;
    Round = 660, "ROUND", [("ROUND", 5)], KW;
    RoutineLevel = 661, "ROUTINE-LEVEL", [("ROUTINE-LEVEL", 13)], KW;
    RowState = 662, "ROW-STATE", [("ROW-STATE", 9)], KW;
    Rowid = 663, "ROWID", [("ROWID", 5)], KW;
    Run = 664, "RUN", [("RUN", 3)], KW | RES;

    // Keywords: S
    Save = 675, "SAVE", [("SAVE", 4)], KW | RES;
    Schema = 676, "SCHEMA", [("SCHEMA", 6)], KW | RES;
    Screen = 677, "SCREEN", [("SCREEN", 6)], KW | RES;
    ScreenLines = 678, "SCREEN-LINES", [("SCREEN-LINES", 12)], KW | RES;
    Scroll = 679, "SCROLL", [("SCROLL", 6)], KW | RES;
    SdbName = 680, "SDBNAME", [("SDBNAME", 7)], KW | RES;
    Search = 681, "SEARCH", [("SEARCH", 6)], KW | RES;
    SecurityPolicy = 682, "SECURITY-POLICY", [("SECURITY-POLICY", 15)], KW;
    Seek = 683, "SEEK", [("SEEK", 4)], KW | RES;
    Select = 684, "SELECT", [("SELECT", 6)], KW | RES;
    SelfKw = 685, "SELF", [("SELF", 4)], KW | RES;
    Session = 686, "SESSION", [("SESSION", 7)], KW | RES;
    Set = 687, "SET", [("SET", 3)], KW | RES;
    SetByteOrder = 688, "SET-BYTE-ORDER", [("SET-BYTE-ORDER", 14)], KW;
    SetPointerValue = 689, "SET-POINTER-VALUE", [("SET-POINTER-VALUE", 15)], KW;
    SetSize = 690, "SET-SIZE", [("SET-SIZE", 8)], KW;
    Sha1Digest = 691, "SHA1-DIGEST", [("SHA1-DIGEST", 11)], KW;
    ShareLock = 692, "SHARE-LOCK", [("SHARE-LOCK", 5)], KW | RES;
    Shared = 693, "SHARED", [("SHARED", 6)], KW | RES;
    Size = 694, "SIZE", [("SIZE", 4)], KW | RES;
    Skip = 695, "SKIP", [("SKIP", 4)], KW | RES;
    SourceProcedure = 696, "SOURCE-PROCEDURE", [("SOURCE-PROCEDURE", 16)], KW;
    Space = 697, "SPACE", [("SPACE", 5)], KW | RES;
    Sqrt = 698, "SQRT", [("SQRT", 4)], KW;
    Static = 699, "STATIC", [("STATIC", 6)], KW;
    Status = 700, "STATUS", [("STATUS", 6)], KW | RES;
    Stop = 701, "STOP", [("STOP", 4)], KW | RES;
    Stream = 702, "STREAM", [("STREAM", 6)], KW | RES;
    String = 703, "STRING", [("STRING", 6)], KW;
    SubMenu = 704, "SUB-MENU", [("SUB-MENU", 7)], KW | RES;
    Substitute = 705, "SUBSTITUTE", [("SUBSTITUTE", 5)], KW;
    Substring = 706, "SUBSTRING", [("SUBSTRING", 6)], KW;
    Sum = 707, "SUM", [("SUM", 3)], KW | RES;
    Super = 708, "SUPER", [("SUPER", 5)], KW | RES;

    // Keywords: T
    Table = 720, "TABLE", [("TABLE", 5)], KW | RES;
    TableHandle = 721, "TABLE-HANDLE", [("TABLE-HANDLE", 12)], KW;
    TargetProcedure = 722, "TARGET-PROCEDURE", [("TARGET-PROCEDURE", 16)], KW;
    TempTable = 723, "TEMP-TABLE", [("TEMP-TABLE", 10)], KW;
    Terminal = 724, "TERMINAL", [("TERMINAL", 8)], KW | RES;
    Then = 725, "THEN", [("THEN", 4)], KW | RES;
    ThisObject = 726, "THIS-OBJECT", [("THIS-OBJECT", 11)], KW;
    ThisProcedure = 727, "THIS-PROCEDURE", [("THIS-PROCEDURE", 14)], KW | RES;
    Through = 728, "THROUGH", [("THROUGH", 7), ("THRU", 4)], KW | RES;
    Time = 729, "TIME", [("TIME", 4)], KW | RES;
    Timezone = 730, "TIMEZONE", [("TIMEZONE", 8)], KW;
    Title = 731, "TITLE", [("TITLE", 5)], KW | RES;
    To = 732, "TO", [("TO", 2)], KW | RES;
    Today = 733, "TODAY", [("TODAY", 5)], KW | RES;
    TopOnly = 734, "TOP-ONLY", [("TOP-ONLY", 8)], KW | RES;
    Total = 735, "TOTAL", [("TOTAL", 5)], KW | RES;
    Transaction = 736, "TRANSACTION", [("TRANSACTION", 8)], KW | RES;
    Triggers = 737, "TRIGGERS", [("TRIGGERS", 8)], KW | RES;
    Trim = 738, "TRIM", [("TRIM", 4)], KW;
    True = 739, "TRUE", [("TRUE", 4)], KW | RES;
    Truncate = 740, "TRUNCATE", [("TRUNCATE", 5)], KW;
    TypeOf = 741, "TYPE-OF", [("TYPE-OF", 7)], KW;

    // Keywords: U
    Undo = 750, "UNDO", [("UNDO", 4)], KW | RES;
    Union = 751, "UNION", [("UNION", 5)], KW | RES;
    Unique = 752, "UNIQUE", [("UNIQUE", 6)], KW | RES;
    Unix = 753, "UNIX", [("UNIX", 4)], KW | RES;
    Up = 754, "UP", [("UP", 2)], KW | RES;
    Update = 755, "UPDATE", [("UPDATE", 6)], KW | RES;
    UseIndex = 756, "USE-INDEX", [("USE-INDEX", 9)], KW | RES;
    UseWidgetPool = 757, "USE-WIDGET-POOL", [("USE-WIDGET-POOL", 15)], KW;
    Userid = 758, "USERID", [("USERID", 6), ("USER", 4)], KW | RES;
    Using = 759, "USING", [("USING", 5)], KW | RES;

    // Keywords: V
    ValidEvent = 770, "VALID-EVENT", [("VALID-EVENT", 11)], KW;
    ValidHandle = 771, "VALID-HANDLE", [("VALID-HANDLE", 12)], KW;
    ValidObject = 772, "VALID-OBJECT", [("VALID-OBJECT", 12)], KW;
    Value = 773, "VALUE", [("VALUE", 5)], KW | RES;
    ValueChanged = 774, "VALUE-CHANGED", [("VALUE-CHANGED", 13)], KW | RES;
    Values = 775, "VALUES", [("VALUES", 6)], KW | RES;
    Variable = 776, "VARIABLE", [("VARIABLE", 3)], KW | RES;
    View = 777, "VIEW", [("VIEW", 4)], KW | RES;
    ViewAs = 778, "VIEW-AS", [("VIEW-AS", 7)], KW | RES;
    Void = 779, "VOID", [("VOID", 4)], KW;

    // Keywords: W X Y
    WaitFor = 790, "WAIT-FOR", [("WAIT-FOR", 8)], KW | RES;
    WebContext = 791, "WEB-CONTEXT", [("WEB-CONTEXT", 11)], KW;
    Weekday = 792, "WEEKDAY", [("WEEKDAY", 7)], KW;
    When = 793, "WHEN", [("WHEN", 4)], KW | RES;
    Where = 794, "WHERE", [("WHERE", 5)], KW | RES;
    While = 795, "WHILE", [("WHILE", 5)], KW | RES;
    WidgetHandle = 796, "WIDGET-HANDLE", [("WIDGET-HANDLE", 8)], KW;
    WidgetPool = 797, "WIDGET-POOL", [("WIDGET-POOL", 11)], KW;
    Window = 798, "WINDOW", [("WINDOW", 6)], KW | RES;
    With = 799, "WITH", [("WITH", 4)], KW | RES;
    WorkTable = 800, "WORK-TABLE", [("WORK-TABLE", 8), ("WORKFILE", 8)], KW | RES;
    Write = 801, "WRITE", [("WRITE", 5)], KW | RES;
    Xcode = 802, "XCODE", [("XCODE", 5)], KW | RES;
    Xref = 803, "XREF", [("XREF", 4)], KW | RES;
    Year = 804, "YEAR", [("YEAR", 4)], KW;
    Yes = 805, "YES", [("YES", 3)], KW | RES;

    // Synthetic structural kinds emitted by the tree builder
    ProgramRoot = 900, "<program-root>", [], STRUCT;
    ProgramTail = 901, "<program-tail>", [], STRUCT;
    CodeBlock = 902, "<code-block>", [], STRUCT;
    ExprStatement = 903, "<expr-statement>", [], STRUCT;
    ParenExpr = 904, "<paren-expr>", [], STRUCT;
    ArraySubscript = 905, "<array-subscript>", [], STRUCT;
    AttributeRef = 906, "<attribute-ref>", [], STRUCT;
    MethodRef = 907, "<method-ref>", [], STRUCT;
    LocalMethodRef = 908, "<local-method-ref>", [], STRUCT;
    NamedMember = 909, "<named-member>", [], STRUCT;
    FieldRef = 910, "<field-ref>", [], STRUCT;
    RecordName = 911, "<record-name>", [], STRUCT;
    WidgetRef = 912, "<widget-ref>", [], STRUCT;
    ParameterList = 913, "<parameter-list>", [], STRUCT;
    MethodParamList = 914, "<method-param-list>", [], STRUCT;
    FieldList = 915, "<field-list>", [], STRUCT;
    EventList = 916, "<event-list>", [], STRUCT;
    AggregatePhrase = 917, "<aggregate-phrase>", [], STRUCT;
    FormatPhrase = 918, "<format-phrase>", [], STRUCT;
    EditingPhrase = 919, "<editing-phrase>", [], STRUCT;
    InlineDefinition = 920, "<inline-definition>", [], STRUCT;
    PropertyGetter = 921, "<property-getter>", [], STRUCT;
    PropertySetter = 922, "<property-setter>", [], STRUCT;
    BlockIterator = 923, "<block-iterator>", [], STRUCT;
    TypeName = 924, "<type-name>", [], STRUCT;
    UserFunc = 925, "<user-func>", [], STRUCT;
    NullNode = 926, "<null-node>", [], STRUCT | PLACEHOLDER;
    LooseEnd = 927, "<loose-end>", [], STRUCT | PLACEHOLDER;
}

impl NodeKind {
    /// The kind's stable numeric id.
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Resolve a numeric id; unknown ids yield [`NodeKind::Invalid`].
    pub fn from_id(id: u16) -> NodeKind {
        crate::ast::catalog::kind_by_id(id)
    }

    /// Canonical display text.
    pub fn text(self) -> &'static str {
        self.spec().text
    }

    /// Lookup spellings with their minimum abbreviation lengths.
    pub fn spellings(self) -> &'static [Spelling] {
        self.spec().spellings
    }

    pub(crate) fn spec(self) -> &'static KindSpec {
        crate::ast::catalog::spec_of(self)
    }

    pub(crate) fn has_flag(self, flag: u8) -> bool {
        self.spec().flags & flag != 0
    }

    /// Keyword spelling (reserved or not).
    pub fn is_keyword(self) -> bool {
        self.has_flag(KW)
    }

    /// Reserved keyword; cannot be used as an identifier.
    pub fn is_reserved_keyword(self) -> bool {
        self.has_flag(RES)
    }

    /// Punctuation/operator symbol.
    pub fn is_symbol(self) -> bool {
        self.has_flag(SYM)
    }

    /// Synthetic structural kind, never produced by the scanner.
    pub fn is_structural(self) -> bool {
        self.has_flag(STRUCT)
    }

    /// Preprocessor directive.
    pub fn is_preprocessor(self) -> bool {
        self.has_flag(PREPROC)
    }

    /// Placeholder kind; nodes of this kind must never carry children.
    pub fn is_placeholder(self) -> bool {
        self.has_flag(PLACEHOLDER)
    }

    /// Hidden-channel token kind (comments, whitespace).
    pub fn is_nonprintable(self) -> bool {
        self.has_flag(NONPRINT)
    }

    /// One of the system handles (SESSION, COMPILER, ...).
    pub fn is_system_handle(self) -> bool {
        crate::ast::catalog::SYSTEM_HANDLES.contains(&self)
    }

    /// Usable as a datatype in a DEFINE ... AS phrase.
    pub fn is_valid_datatype(self) -> bool {
        crate::ast::catalog::DATATYPE_KEYWORDS.contains(&self)
    }

    /// Builtin function callable without an argument list.
    pub fn is_no_arg_function(self) -> bool {
        crate::ast::catalog::NO_ARG_FUNCTIONS.contains(&self)
    }

    /// Builtin function taking a parenthesized argument list.
    pub fn is_regular_function(self) -> bool {
        crate::ast::catalog::REGULAR_FUNCTIONS.contains(&self)
    }

    /// Builtin function taking a record buffer argument.
    pub fn is_record_function(self) -> bool {
        crate::ast::catalog::RECORD_FUNCTIONS.contains(&self)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_discriminant() {
        assert_eq!(NodeKind::Invalid.id(), 0);
        assert_eq!(NodeKind::Define.id(), 273);
        assert_eq!(NodeKind::from_id(273), NodeKind::Define);
        assert_eq!(NodeKind::from_id(54321), NodeKind::Invalid);
    }

    #[test]
    fn display_uses_canonical_text() {
        assert_eq!(NodeKind::DatetimeTz.to_string(), "DATETIME-TZ");
        assert_eq!(NodeKind::Plus.to_string(), "+");
        assert_eq!(NodeKind::CodeBlock.to_string(), "<code-block>");
    }

    #[test]
    fn category_flags() {
        assert!(NodeKind::Define.is_keyword());
        assert!(NodeKind::Define.is_reserved_keyword());
        assert!(NodeKind::Maximum.is_keyword());
        assert!(!NodeKind::Maximum.is_reserved_keyword());
        assert!(NodeKind::Plus.is_symbol());
        assert!(NodeKind::CodeBlock.is_structural());
        assert!(NodeKind::PreprocIf.is_preprocessor());
        assert!(NodeKind::NullNode.is_placeholder());
        assert!(NodeKind::Comment.is_nonprintable());
    }
}
