//! Interactive picker over a few sample recipes.
//!
//! Run with: cargo run --example pick

use markpick::item::InfoItem;
use markpick::picker::{Picker, PickerConfig};

struct Recipe {
    name: &'static str,
    summary: &'static str,
    body: &'static str,
}

impl InfoItem for Recipe {
    fn filter_key(&self) -> String {
        self.name.to_string()
    }

    fn display_name(&self) -> String {
        format!("{} — {}", self.name, self.summary)
    }

    fn detail(&self) -> String {
        self.body.to_string()
    }
}

fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "Shakshuka",
            summary: "eggs poached in spiced tomato sauce",
            body: "# Shakshuka\n\nEggs poached in a **spiced tomato** sauce.\n\n\
                   ## Ingredients\n\n- 6 eggs\n- 1 can crushed tomatoes\n- 1 onion\n\
                   - 2 tsp `cumin`\n\n## Steps\n\n1. Soften the onion\n\
                   2. Simmer the tomatoes\n3. Crack in the eggs and cover\n\n\
                   > Serve straight from the pan.",
        },
        Recipe {
            name: "Dal Tadka",
            summary: "yellow lentils with sizzled spices",
            body: "# Dal Tadka\n\nYellow lentils finished with a *sizzled* spice oil.\n\n\
                   ## Ingredients\n\n- 1 cup toor dal\n- 1 tomato\n- ghee, cumin seeds, garlic\n\n\
                   ## Steps\n\n1. Boil the dal until soft\n2. Fry the tadka separately\n\
                   3. Pour it over and stir once",
        },
        Recipe {
            name: "Carbonara",
            summary: "pasta, eggs, guanciale, pecorino",
            body: "# Carbonara\n\nFour ingredients, no cream.\n\n\
                   ## Ingredients\n\n- spaghetti\n- eggs\n- guanciale\n- pecorino\n\n\
                   > Toss off the heat or the eggs scramble.",
        },
    ]
}

fn main() {
    let recipes = recipes();

    let config = PickerConfig {
        title: Some("What are we cooking?".to_string()),
        name_singular: "recipe".to_string(),
        name_plural: "recipes".to_string(),
        ..Default::default()
    };

    let picker = match Picker::new(&recipes, config) {
        Ok(picker) => picker,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match picker.run() {
        Ok(Some(recipe)) => println!("Tonight: {}", recipe.name),
        Ok(None) => println!("Nothing picked."),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
