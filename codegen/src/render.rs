use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::model::{Field, GeneratedModel};
use crate::naming::accessor_suffix;

const SERIALIZABLE: &str = "java.io.Serializable";

/// `java.math.BigDecimal` -> `BigDecimal`. Unqualified names pass through.
pub fn simple_name(ty: &str) -> &str {
    ty.rsplit('.').next().unwrap_or(ty)
}

fn is_qualified(ty: &str) -> bool {
    ty.contains('.')
}

/// Distinct qualified types the class needs imported, sorted.
pub fn imports(fields: &[Field]) -> BTreeSet<&str> {
    let mut imports = BTreeSet::from([SERIALIZABLE]);
    imports.extend(fields.iter().map(|f| f.ty.as_str()).filter(|ty| is_qualified(ty)));
    imports
}

fn accessors(field: &Field) -> String {
    let ty = simple_name(&field.ty);
    let name = &field.name;
    let suffix = accessor_suffix(name);
    format!(
        "    public {ty} get{suffix}() {{\n        return this.{name};\n    }}\n\n    public void set{suffix}({ty} {name}) {{\n        this.{name} = {name};\n    }}\n"
    )
}

/// A serializable Java bean for one model, rendered through [`fmt::Display`].
///
/// Fields and accessors follow field order. The output for a given model is always the same.
pub struct JavaClass<'a> {
    pub model: &'a GeneratedModel,
    pub package: &'a str,
}

impl fmt::Display for JavaClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;
        let class = &model.class_name;
        writeln!(f, "package {};\n", self.package)?;
        for import in imports(&model.fields) {
            writeln!(f, "import {import};")?;
        }
        writeln!(f)?;
        writeln!(f, "/**\n * Auto-generated model class for table: {}\n */", model.table_name)?;
        writeln!(f, "public class {class} implements Serializable {{")?;
        writeln!(f, "    private static final long serialVersionUID = 1L;\n")?;
        for field in &model.fields {
            writeln!(f, "    private {} {};", simple_name(&field.ty), field.name)?;
        }
        writeln!(f)?;
        writeln!(f, "    public {class}() {{\n    }}")?;
        if !model.fields.is_empty() {
            writeln!(f)?;
            f.write_str(&model.fields.iter().map(accessors).join("\n"))?;
        }
        f.write_str("}\n")
    }
}

pub fn java_class(model: &GeneratedModel, package: &str) -> String {
    JavaClass { model, package }.to_string()
}
