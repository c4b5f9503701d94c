pub mod hero_materials;
