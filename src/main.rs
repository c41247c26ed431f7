/// Demo entry point: lays out a select near the bottom of a small viewport,
/// lets the menu flip, scrolls to an option and prints the rendered HTML.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = demo::run() {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use select_menu::prelude::*;
    use select_menu::{
        to_key, ConfigResult, ElementId, ElementSpec, InnerProps, LayoutTree, OffsetMetrics, Rect,
        Role,
    };

    const OPTION_HEIGHT: f32 = 36.0;
    const CITIES: [&str; 10] = [
        "Amsterdam",
        "Berlin",
        "Copenhagen",
        "Dublin",
        "Edinburgh",
        "Frankfurt",
        "Geneva",
        "Helsinki",
        "Istanbul",
        "Juneau, AK",
    ];

    struct Mounted {
        tree: LayoutTree,
        menu: ElementId,
        list: ElementId,
        options: Vec<ElementId>,
    }

    /// Lay out a control at the bottom of a 500px viewport with its menu below.
    fn mount(config: &SelectConfig) -> Mounted {
        let mut tree = LayoutTree::new(Rect::new(0.0, 0.0, 800.0, 500.0));
        let control = tree.insert(ElementSpec::new(Rect::new(40.0, 420.0, 300.0, 38.0)));

        let list_height = (CITIES.len() as f32 * OPTION_HEIGHT).min(config.max_menu_height);
        let menu_top = 458.0 + config.menu_gutter;
        let menu = tree.insert(
            ElementSpec::new(Rect::new(40.0, menu_top, 300.0, list_height)).parent(control),
        );
        let list = tree.insert(
            ElementSpec::new(Rect::new(40.0, menu_top, 300.0, list_height))
                .parent(menu)
                .scrollable(CITIES.len() as f32 * OPTION_HEIGHT),
        );
        let options = (0..CITIES.len())
            .map(|i| {
                let offset_top = i as f32 * OPTION_HEIGHT;
                tree.insert(
                    ElementSpec::new(Rect::new(40.0, menu_top + offset_top, 300.0, OPTION_HEIGHT))
                        .parent(list)
                        .offset(OffsetMetrics::new(offset_top, OPTION_HEIGHT)),
                )
            })
            .collect();

        Mounted {
            tree,
            menu,
            list,
            options,
        }
    }

    fn option_nodes() -> Vec<Node> {
        CITIES
            .iter()
            .map(|city| -> Node {
                select_menu::Element::new("div")
                    .attr("id", format!("option-{}", to_key(city)))
                    .attr("role", Role::Option.as_str())
                    .child(Node::text(*city))
                    .into()
            })
            .collect()
    }

    pub fn run() -> ConfigResult<()> {
        let config = match std::env::args().nth(1) {
            Some(path) => SelectConfig::load(path)?,
            None => SelectConfig::default(),
        };

        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .init();

        let class_names = config.class_names();
        let theme = config.theme();
        let styles = Styles::default();
        let cx = RenderContext::new(&class_names, &theme, &styles);

        let list = MenuList::<()>::new()
            .max_height(config.max_menu_height)
            .inner_props(InnerProps::new().id("demo-listbox".to_string()))
            .children(option_nodes());
        let mut menu = Menu::<()>::new(config.menu_placement)
            .should_flip(config.menu_should_flip)
            .heuristic(config.flip_heuristic())
            .child(list.render(&cx));

        println!("first paint ({}):\n{}\n", menu.placement(), menu.render(&cx).to_html());

        let mut mounted = mount(&config);
        if menu.commit(&mounted.tree, Some(mounted.menu)) {
            println!("after flip ({}):\n{}\n", menu.placement(), menu.render(&cx).to_html());
        } else {
            log::info!("menu stays on the {} side", menu.placement());
        }

        let scroller = config.scroller();
        for index in [8, 9, 0] {
            let focused = mounted.options[index];
            match list.scroll_to_focused(&mut mounted.tree, mounted.list, focused, &scroller) {
                Some(scroll_top) => println!("focus {} -> scroll_top {:.1}", CITIES[index], scroll_top),
                None => println!("focus {} -> already visible", CITIES[index]),
            }
        }

        println!("\n{}", no_options_message::<()>().render(&cx).to_html());
        println!("{}", loading_message::<()>().render(&cx).to_html());
        Ok(())
    }
}
