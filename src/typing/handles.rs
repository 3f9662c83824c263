//! System-handle member dispatch.
//!
//! Each system handle carries its own attribute and method tables; lookup
//! is case-insensitive and an unknown member resolves to NOT-COMPUTED like
//! every other unresolved reference.

use crate::ast::NodeKind;
use crate::model::DataType;

/// Type of `member` accessed on a system handle.
pub(crate) fn member_type(handle: NodeKind, member: &str, is_method: bool) -> DataType {
    let upper = member.to_ascii_uppercase();
    let specific = match handle {
        NodeKind::Session => session_member(&upper, is_method),
        NodeKind::Compiler => compiler_member(&upper, is_method),
        NodeKind::SecurityPolicy => security_policy_member(&upper, is_method),
        NodeKind::ActiveForm => active_form_member(&upper),
        NodeKind::ErrorStatus => error_status_member(&upper, is_method),
        NodeKind::FileInfo => file_info_member(&upper),
        NodeKind::RcodeInfo => rcode_info_member(&upper),
        NodeKind::ThisProcedure | NodeKind::TargetProcedure | NodeKind::SourceProcedure => {
            procedure_member(&upper, is_method)
        }
        NodeKind::LogManager | NodeKind::DsLogManager => log_manager_member(&upper, is_method),
        NodeKind::Clipboard => clipboard_member(&upper),
        NodeKind::ColorTable => color_table_member(&upper, is_method),
        NodeKind::FontTable => font_table_member(&upper, is_method),
        NodeKind::LastEvent => last_event_member(&upper),
        NodeKind::Debugger => debugger_member(&upper, is_method),
        NodeKind::WebContext => web_context_member(&upper, is_method),
        NodeKind::AuditControl => audit_control_member(&upper, is_method),
        NodeKind::AuditPolicy => audit_policy_member(&upper, is_method),
        NodeKind::Profiler => profiler_member(&upper, is_method),
        NodeKind::SelfKw
        | NodeKind::Focus
        | NodeKind::ActiveWindow
        | NodeKind::CurrentWindow => widget_member(&upper, is_method),
        _ => None,
    };
    specific
        .or_else(|| common_member(&upper))
        .unwrap_or(DataType::NotComputed)
}

/// Attributes every handle answers.
fn common_member(member: &str) -> Option<DataType> {
    use DataType::*;
    Some(match member {
        "HANDLE" => Handle,
        "TYPE" => Character,
        "PRIVATE-DATA" => Character,
        "UNIQUE-ID" => Integer,
        "INSTANTIATING-PROCEDURE" => Handle,
        _ => return None,
    })
}

fn session_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "ADD-SUPER-PROCEDURE" | "REMOVE-SUPER-PROCEDURE" => Logical,
            "EXPORT" | "SET-NUMERIC-FORMAT" | "SET-WAIT-STATE" => Logical,
            "GET-PRINTERS" => Character,
            "GET-WAIT-STATE" => Character,
            _ => return None,
        });
    }
    Some(match member {
        "BATCH-MODE" | "REMOTE" | "SUPPRESS-WARNINGS" | "DEBUG-ALERT" => Logical,
        "CHARSET" | "CLIENT-TYPE" | "CPINTERNAL" | "CPSTREAM" | "DATE-FORMAT"
        | "DISPLAY-TYPE" | "NUMERIC-DECIMAL-POINT" | "NUMERIC-FORMAT" | "NUMERIC-SEPARATOR"
        | "PARAMETER" | "SERVER-CONNECTION-ID" | "STARTUP-PARAMETERS" | "TEMP-DIRECTORY"
        | "TIME-SOURCE" | "WINDOW-SYSTEM" => Character,
        "EXIT-CODE" | "TIMEZONE" | "YEAR-OFFSET" | "PIXELS-PER-COLUMN" | "PIXELS-PER-ROW"
        | "WORK-AREA-HEIGHT-PIXELS" | "WORK-AREA-WIDTH-PIXELS" => Integer,
        "FIRST-BUFFER" | "FIRST-PROCEDURE" | "LAST-PROCEDURE" => Handle,
        "ERROR-STACK-TRACE" => Logical,
        _ => return None,
    })
}

fn compiler_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "GET-COLUMN" | "GET-ERROR-COLUMN" | "GET-ERROR-ROW" | "GET-FILE-OFFSET"
            | "GET-MESSAGE-TYPE" | "GET-NUMBER" | "GET-ROW" => Integer,
            "GET-FILE-NAME" | "GET-MESSAGE" => Character,
            _ => return None,
        });
    }
    Some(match member {
        "CLASS-TYPE" | "FILE-NAME" => Character,
        "ERROR" | "MULTI-COMPILE" | "STOPPED" | "WARNING" => Logical,
        "ERROR-COLUMN" | "ERROR-ROW" | "FILE-OFFSET" | "NUM-MESSAGES" => Integer,
        _ => return None,
    })
}

fn security_policy_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "GET-CLIENT" => Handle,
            "LOAD-DOMAINS" | "LOCK-REGISTRATION" | "REGISTER-DOMAIN" | "SET-CLIENT" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "PASSWORD-RULES" => Character,
        _ => return None,
    })
}

fn active_form_member(member: &str) -> Option<DataType> {
    Some(match member {
        "NEXT-FORM" | "PREV-FORM" => DataType::class("Progress.Windows.IForm"),
        "PROWIN-HANDLE" => DataType::Handle,
        _ => return None,
    })
}

fn error_status_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "GET-MESSAGE" => Character,
            "GET-NUMBER" => Integer,
            _ => return None,
        });
    }
    Some(match member {
        "ERROR" => Logical,
        "ERROR-OBJECT-DETAIL" => DataType::class("Progress.Lang.Error"),
        "NUM-MESSAGES" => Integer,
        _ => return None,
    })
}

fn file_info_member(member: &str) -> Option<DataType> {
    use DataType::*;
    Some(match member {
        "FILE-CREATE-DATE" | "FILE-MOD-DATE" => Date,
        "FILE-CREATE-TIME" | "FILE-MOD-TIME" | "FILE-SIZE" => Integer,
        "FILE-NAME" | "FILE-TYPE" | "FULL-PATHNAME" | "PATHNAME" => Character,
        _ => return None,
    })
}

fn rcode_info_member(member: &str) -> Option<DataType> {
    use DataType::*;
    Some(match member {
        "CRC-VALUE" => Integer,
        "FILE-NAME" | "FULL-PATHNAME" | "INTERNAL-ENTRIES" | "LANGUAGES" => Character,
        "MD5-VALUE" => Raw,
        _ => return None,
    })
}

fn procedure_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "ADD-SUPER-PROCEDURE" | "REMOVE-SUPER-PROCEDURE" | "SET-CALLBACK-PROCEDURE" => {
                Logical
            }
            "GET-SIGNATURE" => Character,
            _ => return None,
        });
    }
    Some(match member {
        "ADM-DATA" | "FILE-NAME" | "INTERNAL-ENTRIES" | "NAME" => Character,
        "CURRENT-WINDOW" | "NEXT-SIBLING" | "PREV-SIBLING" | "SUPER-PROCEDURES" => Handle,
        "PERSISTENT" => Logical,
        _ => return None,
    })
}

fn log_manager_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "CLEAR-LOG" | "CLOSE-LOG" | "WRITE-MESSAGE" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "ENTRY-TYPES-LIST" | "LOG-ENTRY-TYPES" | "LOGFILE-NAME" => Character,
        "LOGGING-LEVEL" | "NUM-LOG-FILES" => Integer,
        _ => return None,
    })
}

fn clipboard_member(member: &str) -> Option<DataType> {
    use DataType::*;
    Some(match member {
        "VALUE" => Character,
        "NUM-FORMATS" => Integer,
        "MULTIPLE" => Logical,
        _ => return None,
    })
}

fn color_table_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "GET-BLUE-VALUE" | "GET-GREEN-VALUE" | "GET-RED-VALUE" | "GET-RGB-VALUE" => Integer,
            "SET-BLUE-VALUE" | "SET-GREEN-VALUE" | "SET-RED-VALUE" | "SET-RGB-VALUE"
            | "SET-DYNAMIC" => Logical,
            "GET-DYNAMIC" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "NUM-ENTRIES" => Integer,
        _ => return None,
    })
}

fn font_table_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "GET-TEXT-HEIGHT-PIXELS" | "GET-TEXT-WIDTH-PIXELS" => Integer,
            "GET-TEXT-HEIGHT-CHARS" | "GET-TEXT-WIDTH-CHARS" => Decimal,
            _ => return None,
        });
    }
    Some(match member {
        "NUM-ENTRIES" => Integer,
        _ => return None,
    })
}

fn last_event_member(member: &str) -> Option<DataType> {
    use DataType::*;
    Some(match member {
        "CODE" | "NUM-BUTTONS" | "X" | "Y" | "ROW" | "COL" => Integer,
        "EVENT-TYPE" | "FUNCTION" | "LABEL" => Character,
        "WIDGET-ENTER" | "WIDGET-LEAVE" => Handle,
        _ => return None,
    })
}

fn debugger_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "CLEAR" | "DEBUG" | "DISPLAY-MESSAGE" | "SET-BREAK" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "VISIBLE" => Logical,
        _ => return None,
    })
}

fn web_context_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "GET-CGI-LIST" | "GET-CGI-VALUE" | "GET-CONFIG-VALUE" | "URL-DECODE"
            | "URL-ENCODE" => Character,
            _ => return None,
        });
    }
    Some(match member {
        "EXCLUSIVE-ID" | "SESSION-ID" => Character,
        _ => return None,
    })
}

fn audit_control_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "BEGIN-EVENT-GROUP" | "LOG-AUDIT-EVENT" => Character,
            "CLEAR-APPL-CONTEXT" | "END-EVENT-GROUP" | "SET-APPL-CONTEXT" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "APPL-CONTEXT-ID" => Character,
        "ENABLED" => Logical,
        _ => return None,
    })
}

fn audit_policy_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "REFRESH-AUDIT-POLICY" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "ACTIVE" => Logical,
        _ => return None,
    })
}

fn profiler_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "USER-DATA" | "WRITE-DATA" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "COVERAGE" | "ENABLED" | "LISTINGS" | "PROFILING" => Logical,
        "DESCRIPTION" | "FILE-NAME" | "TRACE-FILTER" => Character,
        _ => return None,
    })
}

/// Generic widget attributes for the widget-valued handles (SELF, FOCUS,
/// ACTIVE-WINDOW, CURRENT-WINDOW).
fn widget_member(member: &str, is_method: bool) -> Option<DataType> {
    use DataType::*;
    if is_method {
        return Some(match member {
            "MOVE-TO-TOP" | "MOVE-TO-BOTTOM" | "LOAD-ICON" | "LOAD-MOUSE-POINTER" => Logical,
            _ => return None,
        });
    }
    Some(match member {
        "COL" | "ROW" | "HEIGHT-CHARS" | "WIDTH-CHARS" => Decimal,
        "HEIGHT-PIXELS" | "WIDTH-PIXELS" | "X" | "Y" => Integer,
        "LABEL" | "NAME" | "SCREEN-VALUE" | "TITLE" => Character,
        "HIDDEN" | "SENSITIVE" | "VISIBLE" => Logical,
        "FIRST-CHILD" | "LAST-CHILD" | "NEXT-SIBLING" | "PREV-SIBLING" | "PARENT" | "WINDOW" => {
            Handle
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use DataType::*;

    #[test]
    fn session_attributes_and_methods() {
        assert_eq!(
            member_type(NodeKind::Session, "numeric-format", false),
            Character
        );
        assert_eq!(member_type(NodeKind::Session, "TIMEZONE", false), Integer);
        assert_eq!(
            member_type(NodeKind::Session, "GET-PRINTERS", true),
            Character
        );
        assert_eq!(
            member_type(NodeKind::Session, "NO-SUCH-ATTR", false),
            NotComputed
        );
    }

    #[test]
    fn compiler_table() {
        assert_eq!(member_type(NodeKind::Compiler, "ERROR", false), Logical);
        assert_eq!(
            member_type(NodeKind::Compiler, "GET-MESSAGE", true),
            Character
        );
        assert_eq!(
            member_type(NodeKind::Compiler, "NUM-MESSAGES", false),
            Integer
        );
    }

    #[test]
    fn common_attributes_apply_to_every_handle() {
        assert_eq!(member_type(NodeKind::Session, "HANDLE", false), Handle);
        assert_eq!(member_type(NodeKind::Profiler, "TYPE", false), Character);
        assert_eq!(
            member_type(NodeKind::ErrorStatus, "PRIVATE-DATA", false),
            Character
        );
    }

    #[test]
    fn class_valued_members() {
        assert_eq!(
            member_type(NodeKind::ActiveForm, "NEXT-FORM", false),
            DataType::class("Progress.Windows.IForm")
        );
        assert_eq!(
            member_type(NodeKind::ErrorStatus, "ERROR-OBJECT-DETAIL", false),
            DataType::class("Progress.Lang.Error")
        );
    }

    #[test]
    fn widget_handles_share_the_widget_table() {
        for handle in [
            NodeKind::SelfKw,
            NodeKind::Focus,
            NodeKind::ActiveWindow,
            NodeKind::CurrentWindow,
        ] {
            assert_eq!(member_type(handle, "SCREEN-VALUE", false), Character);
            assert_eq!(member_type(handle, "SENSITIVE", false), Logical);
        }
    }
}
