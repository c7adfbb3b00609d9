/// Builds the markdown itinerary prompt sent to the completion API.
///
/// Each idea becomes one bulleted line under "Additional Ideas:"; with no
/// ideas the heading is kept and the section has no bullets.
pub fn make_itinerary_prompt(
    dates: &str,
    location: &str,
    num_people: u32,
    mood: &str,
    ideas: &[String],
) -> String {
    let ideas_md: String = ideas
        .iter()
        .map(|idea| format!("\n  - {}", one_line(idea)))
        .collect();

    let prompt = format!(
        r#"
You are a professional travel event planner with expertise in creating personalized, immersive travel experiences. Your goal is to create a detailed, day-by-day travel itinerary in Markdown format that is visually appealing, easy to follow, and tailored to the traveler's preferences.

Trip Details:
- Date: {dates}
- Location: {location}
- Number of People: {num_people}
- Mood: {mood}
- Additional Ideas:{ideas_md}

Requirements:
- Organize the itinerary by day and time, considering travel time between locations.
- Recommend restaurants, bars, cafes, and local dining spots.
- Suggest activities, attractions, and highlights that align with the mood.
- Include local tips, best times to visit, and insider knowledge.
- Use headings and subheadings to structure the itinerary clearly in Markdown.
- Make the itinerary engaging, fun, and practical for travelers.

Format Output Example:

{format_example}
"#,
        format_example = FORMAT_EXAMPLE,
    );

    prompt.trim().to_string()
}

// Lines ending in two spaces are Markdown hard breaks.
const FORMAT_EXAMPLE: &str = concat!(
    "### Day 1 – [Date]\n",
    "**Morning:**  \n",
    "- Activity / Location (include tips or notes)  \n",
    "- Cafe / Breakfast spot\n",
    "\n",
    "**Afternoon:**  \n",
    "- Activity / Lunch spot  \n",
    "\n",
    "**Evening:**  \n",
    "- Activity / Dinner spot  \n",
    "- Optional nightlife or local experience\n",
    "\n",
    "Repeat for each day of the trip.",
);

fn one_line(idea: &str) -> String {
    idea.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
