//! Candidate field tables.
//!
//! Every canonical attribute is resolved from an ordered list of upstream
//! field names or dotted paths. The first entry that yields a usable value
//! wins, so entries are listed most authoritative first. Casing variants are
//! spelled out instead of matched case-insensitively: deployments disagree on
//! casing but never mix two spellings of a key in one payload.

/// Keys under which a payload may hold its list of records.
pub mod containers {
    pub const MARK_GROUPS: &[&str] = &["Subjects", "subjects", "Items", "items"];
    pub const MARKS_IN_GROUP: &[&str] = &["Marks", "marks"];
    pub const HOMEWORK: &[&str] = &["Homeworks", "homeworks", "Items", "items"];
    pub const EVENTS: &[&str] = &["Events", "events", "Items", "items"];
}

pub mod mark {
    /// Resolved on the subject group, not on the individual mark.
    pub const SUBJECT_NAME: &[&str] = &[
        "Subject.Abbreviation",
        "Subject.Name",
        "subject.abbreviation",
        "subject.name",
        "Abbreviation",
        "Name",
        "abbreviation",
        "name",
    ];
    pub const VALUE: &[&str] = &["MarkValue", "Value", "Mark", "markValue", "value", "mark"];
    pub const EDIT_DATE: &[&str] = &[
        "EditDate",
        "editDate",
        "Date",
        "date",
        "CreateDate",
        "createDate",
    ];
    pub const CAPTION: &[&str] = &["Caption", "caption", "Description", "description"];
    pub const THEME: &[&str] = &["Theme", "theme", "LessonTheme", "lessonTheme"];
}

pub mod homework {
    pub const SUBJECT_NAME: &[&str] = &[
        "Subject.Abbreviation",
        "Subject.Name",
        "subject.abbreviation",
        "subject.name",
        "SubjectAbbreviation",
        "SubjectName",
        "subjectName",
    ];
    /// Deadline first, then when the work was set, then when it was created.
    pub const DUE_DATE: &[&str] = &[
        "DueDate",
        "dueDate",
        "Deadline",
        "deadline",
        "StartDate",
        "startDate",
        "CreateDate",
        "createDate",
        "CreatedAt",
        "createdAt",
    ];
    /// Explicit text before titles and names.
    pub const CONTENT: &[&str] = &[
        "Content",
        "content",
        "Text",
        "text",
        "Description",
        "description",
        "Title",
        "title",
        "Name",
        "name",
    ];
}

pub mod event {
    pub const SUBJECT_NAME: &[&str] = &[
        "Subject.Abbreviation",
        "Subject.Name",
        "subject.abbreviation",
        "subject.name",
        "SubjectName",
        "subjectName",
    ];
    pub const START_DATE: &[&str] = &[
        "StartDate",
        "startDate",
        "Start",
        "start",
        "DateTime",
        "Date",
        "date",
    ];
    pub const END_DATE: &[&str] = &["EndDate", "endDate", "End", "end", "FinishDate", "finishDate"];
    pub const TITLE: &[&str] = &["Title", "title", "Name", "name"];
    pub const DESCRIPTION: &[&str] = &["Description", "description", "Content", "content", "Text"];
    /// The type field is either a plain string or an object naming the type.
    pub const TYPE: &[&str] = &[
        "Type.Name",
        "Type.Abbreviation",
        "type.name",
        "type.abbreviation",
        "Type",
        "type",
        "EventType",
        "eventType",
    ];

    pub const UNKNOWN_TITLE: &str = "Unknown event";
}

pub mod auth {
    pub const ACCESS_TOKEN: &[&str] = &["access_token", "AccessToken", "accessToken", "token", "Token"];
}
