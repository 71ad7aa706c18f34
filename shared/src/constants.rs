// Platform types the generated code is written against
pub const ACTIVITY_BASE: &str = "android.app.Activity";
pub const VIEW_BASE: &str = "android.view.View";
pub const BUNDLE: &str = "android.os.Bundle";
pub const CLICK_LISTENER: &str = "OnClickListener";

pub const JAVA_LANG: &str = "java.lang";
pub const OBJECT: &str = "java.lang.Object";
pub const OVERRIDE: &str = "java.lang.Override";

// Codegen defaults
pub const GENERATED_SUFFIX: &str = "_";
pub const DEFAULT_INDENT: &str = "    ";

// Upper bound on base-type chain walks
pub const MAX_HIERARCHY_DEPTH: usize = 64;
