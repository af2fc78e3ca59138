#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_ast_parse_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, QUERY).ok();
    });
}

fn graphql_ast_parse_async_graphql_parser(bench: &mut Bencher) {
    use async_graphql_parser::parse_query;
    bench.iter(|| {
        parse_query::<&str>(QUERY).ok();
    });
}

fn graphql_ast_parse_graphql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    bench.iter(|| {
        parse_query::<&str>(QUERY).ok();
    });
}

fn graphql_ast_parse_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::Parser;
    bench.iter(|| {
        let parser = Parser::new(QUERY);
        let cst = parser.parse();
        cst.document();
    });
}

fn graphql_sdl_parse_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, KITCHEN_SINK).ok();
    });
}

fn graphql_sdl_parse_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::Parser;
    bench.iter(|| {
        let parser = Parser::new(KITCHEN_SINK);
        let cst = parser.parse();
        cst.document();
    });
}

fn graphql_ast_print_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    let ctx = ASTContext::new();
    let ast = Document::parse(&ctx, QUERY).unwrap();
    bench.iter(|| ast.print());
}

fn graphql_ast_print_comments_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    let ctx = ASTContext::new();
    let ast = Document::parse(&ctx, COMMENTS).unwrap();
    let options = PrintOptions::new().preserve_comments(true).pretty(true);
    bench.iter(|| ast.print_with(options));
}

fn graphql_ast_print_gql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    let ast = parse_query::<&str>(QUERY).ok().unwrap();
    bench.iter(|| ast.to_string());
}

fn graphql_ast_print_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::cst::CstNode;
    use apollo_parser::Parser;
    let parser = Parser::new(QUERY);
    let cst = parser.parse();
    let doc = cst.document();
    bench.iter(|| doc.source_string());
}

fn graphql_ast_fold(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    use graphql_syntax::visit::*;

    let ctx = ASTContext::new();
    let ast = Document::parse(&ctx, KITCHEN_SINK).unwrap();
    bench.iter(|| {
        let mut visitors = Visitors::new().on_leave(ASTKind::NamedType, |ctx, _node, _info| {
            let named_type = NamedType::parse(ctx, "Oomph")?;
            Ok(Some(Node::NamedType(named_type)))
        });
        ast.fold(&ctx, &mut visitors).unwrap()
    });
}

benchmark_group!(
    parse,
    graphql_ast_parse_graphql_syntax,
    graphql_ast_parse_async_graphql_parser,
    graphql_ast_parse_graphql_parser,
    graphql_ast_parse_apollo_parser,
    graphql_sdl_parse_graphql_syntax,
    graphql_sdl_parse_apollo_parser,
    graphql_ast_print_graphql_syntax,
    graphql_ast_print_comments_graphql_syntax,
    graphql_ast_print_gql_parser,
    graphql_ast_print_apollo_parser,
    graphql_ast_fold
);

benchmark_main!(parse);

static QUERY: &str = r#"
query queryName($foo: ComplexType, $site: Site = MOBILE) @onQuery {
  whoever123is: node(id: [123, 456]) {
    id
    ... on User @onInlineFragment {
      field2 {
        id
        alias: field1(first: 10, after: $foo) @include(if: $foo) {
          id
          ...frag @onFragmentSpread
        }
      }
    }
    ... @skip(unless: $foo) {
      id
    }
  }
}

mutation likeStory @onMutation {
  like(story: 123) @onField {
    story {
      id @onField
    }
  }
}

fragment frag on Friend @onFragmentDefinition {
  foo(size: $size, bar: $b, obj: { key: "value" })
}
"#;

static KITCHEN_SINK: &str = include_str!("../fixture/kitchen_sink.graphql");
static COMMENTS: &str = include_str!("../fixture/comments.graphql");
