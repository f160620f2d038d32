//! Literal text that surrounds the generated declarations.
//!
//! Nothing here is derived from the key space. The owner-removal adapters and
//! the two `StringList` lookups belong to the host parser's API and change
//! with it, so they travel as plain text that a config file can replace.

use serde::{Deserialize, Serialize};

use getsig_contracts::GENERATED_BANNER;

const OWNER_ADAPTERS_AND_LIST_LOOKUPS: &str = r#"  // The following are helper functions for getting the signature of a Calc function that
  // requires an owner, that is a ParseArith instance. The signature as far as the parser is
  // concerned is the same as if there is no owner argument. Note that the function returned
  // is a dummy - don't use it for anything but passing to the appropriate getSignature
  // function. Note also that you must use registerWithOwner when registering.

  def removeOwner[R](f: (ParseArith) => R): () => R = {
    def dummy(): R = f(null)
    dummy _
  }

  def removeOwner[A1, R](f: (ParseArith, A1) => R): (A1) => R = {
    def dummy(ex1: A1): R = f(null, ex1)
    dummy
  }

  def removeOwner[A1, A2, R](f: (ParseArith, A1, A2) => R): (A1, A2) => R = {
    def dummy(ex1: A1, ex2: A2): R = f(null, ex1, ex2)
    dummy
  }

  def removeOwner[A1, A2, A3, R](f: (ParseArith, A1, A2, A3) => R): (A1, A2, A3) => R = {
    def dummy(ex1: A1, ex2: A2, ex3: A3): R = f(null, ex1, ex2, ex3)
    dummy
  }

  def removeOwner[A1, A2, A3, A4, R](f: (ParseArith, A1, A2, A3, A4) => R): (A1, A2, A3, A4) => R = {
    def dummy(ex1: A1, ex2: A2, ex3: A3, ex4: A4): R = f(null, ex1, ex2, ex3, ex4)
    dummy
  }

  def getSignatureStringStringList2Boolean(f: (sFun, List[String]) => bFun) = getSignature(List(StringFun, StringList), BooleanFun)
  def getSignatureStringStringList2Int(f: (sFun, List[String]) => iFun) = getSignature(List(StringFun, StringList), IntFun)
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fragments {
    /// First line of both artifacts.
    pub banner: String,
    pub package: String,
    pub registry_imports: Vec<String>,
    /// Object holding the generated lookups; assertions qualify calls with it.
    pub registry_object: String,
    /// Lower-level lookup primitive every generated function delegates to.
    pub lookup_fn: String,
    /// Emitted verbatim after the object opening, before the generated lines.
    pub registry_predefined: String,
    pub test_imports: Vec<String>,
    /// Annotation and class line opening the test suite.
    pub test_class_open: String,
    /// Test cases are named `<case_prefix>_<return alias>_<arity>`.
    pub case_prefix: String,
    /// Parameter type of the dummy value providers.
    pub value_context: String,
}

impl Default for Fragments {
    fn default() -> Self {
        Fragments {
            banner: GENERATED_BANNER.to_string(),
            package: "gorsat.parser".to_string(),
            registry_imports: vec!["gorsat.parser.FunctionTypes._".to_string()],
            registry_object: "FunctionSignature".to_string(),
            lookup_fn: "getSignature".to_string(),
            registry_predefined: OWNER_ADAPTERS_AND_LIST_LOOKUPS.to_string(),
            test_imports: vec![
                "org.gorpipe.gor.ColumnValueProvider".to_string(),
                "gorsat.parser.FunctionTypes.{dFun, iFun, lFun, sFun, bFun}".to_string(),
                "org.scalatest.FunSuite".to_string(),
                "org.junit.runner.RunWith".to_string(),
                "org.scalatest.junit.JUnitRunner".to_string(),
            ],
            test_class_open: "@RunWith(classOf[JUnitRunner])\nclass UTestFunctionSignature extends FunSuite {"
                .to_string(),
            case_prefix: "getSignature".to_string(),
            value_context: "ColumnValueProvider".to_string(),
        }
    }
}

impl Fragments {
    /// Banner, package and imports, framed by blank lines.
    pub fn file_header(&self, imports: &[String]) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&self.banner);
        out.push('\n');
        out.push_str(&format!("package {}\n\n", self.package));
        for imp in imports {
            out.push_str(&format!("import {imp}\n"));
        }
        out.push('\n');
        out
    }
}
