use sparrow_test_suite::*;

mod ordering {
    use super::*;

    #[test]
    fn source_order_across_kinds() {
        Test::new("func a() {}\nvar b = 1\nfunc c() {}\nstruct D {}\nvar e = 2")
            .expect(Parses)
            .expect(TopLevel(vec!["a", "b", "c", "D", "e"]));
    }

    #[test]
    fn statements_are_not_declarations() {
        Test::new("print(\"start\")\nlet x = 1\nx.run()\nfunc f() {}")
            .expect(Parses)
            .expect(TopLevel(vec!["x", "f"]));
    }

    #[test]
    fn nested_scopes_are_not_flattened() {
        Test::new("struct Outer {\n  struct Inner {\n    var deep = 1\n  }\n  var shallow = 2\n}")
            .expect(Parses)
            .expect(TopLevel(vec!["Outer"]))
            .expect(Decl::new("Outer").has(Fact::Children(vec!["Inner", "shallow"])))
            .expect(Decl::new("Outer.Inner").has(Fact::Children(vec!["deep"])));
    }

    #[test]
    fn declarations_in_control_flow_are_not_members() {
        Test::new("func f() {\n    if ready {\n        let hidden = 1\n    }\n    let shown = 2\n}")
            .expect(Parses)
            .expect(Decl::new("f").has(Fact::Children(vec!["shown"])));
    }
}

mod empty_scopes {
    use super::*;

    #[test]
    fn empty_file() {
        Test::new("").expect(Parses).expect(TopLevel(vec![]));
    }

    #[test]
    fn empty_type() {
        Test::new("class Empty {}")
            .expect(Parses)
            .expect(Decl::new("Empty").has(Fact::ChildCount(0)));
    }

    #[test]
    fn kinds_without_members() {
        Test::new("typealias ID = String\nimport Foundation\nvar x = 1")
            .expect(Parses)
            .expect(Decl::new("ID").has(Fact::ChildCount(0)))
            .expect(Decl::new("Foundation").has(Fact::ChildCount(0)))
            .expect(Decl::new("x").has(Fact::ChildCount(0)));
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_body_is_reported() {
        Test::new("struct Broken")
            .expect(HasError("expected `{`"))
            .expect(HasErrorCount(1))
            .expect(Decl::new("Broken").is(Kind::Structure).has(Fact::ChildCount(0)));
    }
}
