use sparrow_test_suite::*;

mod cases {
    use super::*;

    #[test]
    fn each_element_is_a_case() {
        Test::new("enum Direction { case north, south\n case east\n case west }")
            .expect(Parses)
            .expect(
                Decl::new("Direction")
                    .has(Fact::Children(vec!["north", "south", "east", "west"])),
            )
            .expect(Decl::new("south").is(Kind::EnumCase).has(Fact::Keyword("case")));
    }

    #[test]
    fn raw_values() {
        Test::new("enum Planet: Int { case mercury = 1, venus }")
            .expect(Parses)
            .expect(Decl::new("Planet").has(Fact::Inherits("Int")))
            .expect(Decl::new("mercury").has(Fact::RawValue("1")))
            .expect(Decl::new("venus").not(Fact::RawValue("1")));
    }

    #[test]
    fn associated_values() {
        Test::new("enum Shape { case circle(radius: Double)\n case rect(Double, Double) }")
            .expect(Parses)
            .expect(
                Decl::new("circle")
                    .has(Fact::ParameterCount(1))
                    .has(Fact::ParameterLabels(vec!["radius"])),
            )
            .expect(Decl::new("rect").has(Fact::ParameterLabels(vec!["_", "_"])));
    }

    #[test]
    fn indirect_case() {
        Test::new("enum Tree { indirect case node(Tree, Tree)\n case leaf }")
            .expect(Parses)
            .expect(Decl::new("node").has(Fact::Modifier("indirect")))
            .expect(Decl::new("leaf").not(Fact::Modifier("indirect")));
    }

    #[test]
    fn cases_mixed_with_members() {
        Test::new("enum Mode { case on\n var isOn: Bool { self == .on }\n case off }")
            .expect(Parses)
            .expect(Decl::new("Mode").has(Fact::Children(vec!["on", "isOn", "off"])));
    }
}
