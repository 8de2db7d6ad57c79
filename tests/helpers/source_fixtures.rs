//! Common source fixtures for tests.

// The two-package corpus: `stuff` holds the base types, `stuff2` reaches them
// through a single-type import, its own package and an on-demand import.
pub const STUFF_A: &str = r#"
package stuff;

public class A {
    public int value() { return 1; }
}
"#;

pub const STUFF_B: &str = r#"
package stuff;

/** B refines A. */
public class B extends A {
    @Override
    public int value() { return 2; }
}
"#;

pub const STUFF_C: &str = r#"
package stuff;

public abstract class C {
}
"#;

pub const STUFF_D: &str = r#"
package stuff;

final class D implements Runnable {
    public void run() {}
}
"#;

pub const STUFF2_A: &str = r#"
package stuff2;

import stuff.A;

public class A extends stuff.A {
}
"#;

pub const STUFF2_AA: &str = r#"
package stuff2;

public class AA extends A {
}
"#;

pub const STUFF2_B: &str = r#"
package stuff2;

import stuff.*;

public class B extends B {
}
"#;

/// `(file name, source)` pairs for the two-package corpus, in load order.
pub const TWO_PACKAGE_CORPUS: &[(&str, &str)] = &[
    ("stuff/A.java", STUFF_A),
    ("stuff/B.java", STUFF_B),
    ("stuff/C.java", STUFF_C),
    ("stuff/D.java", STUFF_D),
    ("stuff2/AA.java", STUFF2_AA),
    ("stuff2/A.java", STUFF2_A),
    ("stuff2/B.java", STUFF2_B),
];

// Default package
pub const NO_PACKAGE: &str = r#"
import java.util.List;

public class Standalone {
}
"#;

// Nothing but comments and a string that mentions `class`
pub const COMMENTS_ONLY: &str = r#"
// class Fake extends Nothing {}
/* interface Hidden {} */
"class NotReal {}"
"#;

pub const ANNOTATED_INTERFACE: &str = r#"
package api;

import java.lang.annotation.Retention;
import static java.lang.annotation.RetentionPolicy.RUNTIME;

@Retention(RUNTIME)
public @interface Marker {
}
"#;

pub const MULTI_EXTENDS_INTERFACE: &str = r#"
package api;

public interface Both extends First, second.Second {
    void both();
}
"#;

pub const GENERIC_CLASS: &str = r#"
package generic;

public class Box<T extends Comparable<T>> extends Container<T>
        implements Iterable<Map.Entry<String, T>> {
}
"#;
