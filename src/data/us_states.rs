//! Compiled-in table: the 50 U.S. states with capital, flower and bird.

use crate::models::{FactTable, RegionFacts};

const US_STATES: [(&str, &str, &str, &str); 50] = [
    ("Alabama", "Montgomery", "Camellia", "Yellowhammer"),
    ("Alaska", "Juneau", "Forget-me-not", "Willow ptarmigan"),
    ("Arizona", "Phoenix", "Saguaro cactus blossom", "Cactus wren"),
    ("Arkansas", "Little Rock", "Apple blossom", "Northern mockingbird"),
    ("California", "Sacramento", "California poppy", "California quail"),
    ("Colorado", "Denver", "Rocky Mountain columbine", "Lark bunting"),
    ("Connecticut", "Hartford", "Mountain laurel", "American robin"),
    ("Delaware", "Dover", "Peach blossom", "Delaware blue hen"),
    ("Florida", "Tallahassee", "Orange blossom", "Northern mockingbird"),
    ("Georgia", "Atlanta", "Cherokee rose", "Brown thrasher"),
    ("Hawaii", "Honolulu", "Hawaiian hibiscus", "Nēnē (Hawaiian goose)"),
    ("Idaho", "Boise", "Syringa (mock orange)", "Mountain bluebird"),
    ("Illinois", "Springfield", "Violet", "Northern cardinal"),
    ("Indiana", "Indianapolis", "Peony", "Northern cardinal"),
    ("Iowa", "Des Moines", "Wild rose", "Eastern goldfinch"),
    ("Kansas", "Topeka", "Sunflower", "Western meadowlark"),
    ("Kentucky", "Frankfort", "Goldenrod", "Northern cardinal"),
    ("Louisiana", "Baton Rouge", "Magnolia", "Brown pelican"),
    ("Maine", "Augusta", "White pine cone and tassel", "Black-capped chickadee"),
    ("Maryland", "Annapolis", "Black-eyed Susan", "Baltimore oriole"),
    ("Massachusetts", "Boston", "Mayflower", "Black-capped chickadee"),
    ("Michigan", "Lansing", "Apple blossom", "American robin"),
    ("Minnesota", "Saint Paul", "Pink and white lady's slipper", "Common loon"),
    ("Mississippi", "Jackson", "Magnolia", "Northern mockingbird"),
    ("Missouri", "Jefferson City", "Hawthorn", "Eastern bluebird"),
    ("Montana", "Helena", "Bitterroot", "Western meadowlark"),
    ("Nebraska", "Lincoln", "Goldenrod", "Western meadowlark"),
    ("Nevada", "Carson City", "Sagebrush", "Mountain bluebird"),
    ("New Hampshire", "Concord", "Purple lilac", "Purple finch"),
    ("New Jersey", "Trenton", "Violet", "Eastern goldfinch"),
    ("New Mexico", "Santa Fe", "Yucca flower", "Greater roadrunner"),
    ("New York", "Albany", "Rose", "Eastern bluebird"),
    ("North Carolina", "Raleigh", "Flowering dogwood", "Northern cardinal"),
    ("North Dakota", "Bismarck", "Wild prairie rose", "Western meadowlark"),
    ("Ohio", "Columbus", "Scarlet carnation", "Northern cardinal"),
    ("Oklahoma", "Oklahoma City", "Oklahoma rose", "Scissor-tailed flycatcher"),
    ("Oregon", "Salem", "Oregon grape", "Western meadowlark"),
    ("Pennsylvania", "Harrisburg", "Mountain laurel", "Ruffed grouse"),
    ("Rhode Island", "Providence", "Violet", "Rhode Island Red"),
    ("South Carolina", "Columbia", "Yellow jessamine", "Carolina wren"),
    ("South Dakota", "Pierre", "Pasque flower", "Ring-necked pheasant"),
    ("Tennessee", "Nashville", "Iris", "Northern mockingbird"),
    ("Texas", "Austin", "Bluebonnet", "Northern mockingbird"),
    ("Utah", "Salt Lake City", "Sego lily", "California gull"),
    ("Vermont", "Montpelier", "Red clover", "Hermit thrush"),
    ("Virginia", "Richmond", "American dogwood", "Northern cardinal"),
    ("Washington", "Olympia", "Coast rhododendron", "American goldfinch"),
    ("West Virginia", "Charleston", "Rhododendron", "Northern cardinal"),
    ("Wisconsin", "Madison", "Wood violet", "American robin"),
    ("Wyoming", "Cheyenne", "Indian paintbrush", "Western meadowlark"),
];

/// The default table used when no facts file is given.
pub fn us_states() -> FactTable {
    FactTable::from_trusted(
        US_STATES
            .iter()
            .map(|&(state, capital, flower, bird)| {
                RegionFacts::new(state, capital).with_secondary(flower, bird)
            })
            .collect(),
    )
}
