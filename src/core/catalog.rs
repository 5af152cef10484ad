//! # Widget Catalog
//!
//! Static table of Flutter widget samples shown by the widget explorer.
//!
//! ```text
//! Category ──► [ WidgetEntry { key, name, code }, ... ]
//! ```
//!
//! The table is built into the binary and never mutated. Entry order is
//! display order: the first entry of each category is what the explorer
//! shows before anything is selected.

use std::fmt;
use std::str::FromStr;

/// A group of related widgets, one per explorer slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Layout,
    Ui,
    Interactive,
    StateManagement,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Layout,
        Category::Ui,
        Category::Interactive,
        Category::StateManagement,
    ];

    /// Key used in deck directives (`<!-- explorer: layout -->`).
    pub fn key(self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Ui => "ui",
            Category::Interactive => "interactive",
            Category::StateManagement => "statemanagement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Layout => "Layout",
            Category::Ui => "UI",
            Category::Interactive => "Interactive",
            Category::StateManagement => "State Management",
        }
    }

    /// All entries of this category, in display order.
    pub fn entries(self) -> &'static [WidgetEntry] {
        match self {
            Category::Layout => LAYOUT,
            Category::Ui => UI,
            Category::Interactive => INTERACTIVE,
            Category::StateManagement => STATE_MANAGEMENT,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.trim().to_string())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct WidgetEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

/// Look up a widget by category and item key. Absent keys yield `None`.
pub fn lookup(category: Category, key: &str) -> Option<&'static WidgetEntry> {
    category.entries().iter().find(|entry| entry.key == key)
}

// ============================================================================
// Table
// ============================================================================

const LAYOUT: &[WidgetEntry] = &[
    WidgetEntry {
        key: "container",
        name: "Container",
        code: r#"Container(
  width: 200,
  height: 100,
  padding: EdgeInsets.all(16),
  margin: EdgeInsets.all(8),
  decoration: BoxDecoration(
    color: Colors.blue,
    borderRadius: BorderRadius.circular(12),
  ),
  child: Text('Hello!'),
)"#,
    },
    WidgetEntry {
        key: "column",
        name: "Column",
        code: r#"Column(
  mainAxisAlignment: MainAxisAlignment.center,
  crossAxisAlignment: CrossAxisAlignment.start,
  children: [
    Text('First'),
    Text('Second'),
    Text('Third'),
  ],
)"#,
    },
    WidgetEntry {
        key: "row",
        name: "Row",
        code: r#"Row(
  mainAxisAlignment: MainAxisAlignment.spaceEvenly,
  children: [
    Icon(Icons.star),
    Icon(Icons.favorite),
    Icon(Icons.share),
  ],
)"#,
    },
    WidgetEntry {
        key: "stack",
        name: "Stack",
        code: r#"Stack(
  children: [
    Container(color: Colors.blue),
    Positioned(
      top: 20,
      left: 20,
      child: Text('Overlay'),
    ),
  ],
)"#,
    },
];

const UI: &[WidgetEntry] = &[
    WidgetEntry {
        key: "text",
        name: "Text",
        code: r#"Text(
  'Hello Flutter!',
  style: TextStyle(
    fontSize: 24,
    fontWeight: FontWeight.bold,
    color: Colors.blue,
    letterSpacing: 2.0,
  ),
)"#,
    },
    WidgetEntry {
        key: "image",
        name: "Image",
        code: r#"// Network Image
Image.network(
  'https://example.com/image.png',
  width: 200,
  height: 200,
  fit: BoxFit.cover,
)

// Asset Image
Image.asset('assets/logo.png')"#,
    },
    WidgetEntry {
        key: "icon",
        name: "Icon",
        code: r#"Icon(
  Icons.favorite,
  color: Colors.red,
  size: 48.0,
)"#,
    },
    WidgetEntry {
        key: "card",
        name: "Card",
        code: r#"Card(
  elevation: 8.0,
  shape: RoundedRectangleBorder(
    borderRadius: BorderRadius.circular(12),
  ),
  child: Padding(
    padding: EdgeInsets.all(16),
    child: Text('Card Content'),
  ),
)"#,
    },
];

const INTERACTIVE: &[WidgetEntry] = &[
    WidgetEntry {
        key: "button",
        name: "ElevatedButton",
        code: r#"ElevatedButton(
  onPressed: () {
    print('Button pressed!');
  },
  style: ElevatedButton.styleFrom(
    backgroundColor: Colors.blue,
    padding: EdgeInsets.symmetric(
      horizontal: 32,
      vertical: 16,
    ),
  ),
  child: Text('Click Me'),
)"#,
    },
    WidgetEntry {
        key: "textfield",
        name: "TextField",
        code: r#"TextField(
  decoration: InputDecoration(
    labelText: 'Enter your name',
    hintText: 'John Doe',
    border: OutlineInputBorder(),
    prefixIcon: Icon(Icons.person),
  ),
  onChanged: (value) {
    print('Input: $value');
  },
)"#,
    },
    WidgetEntry {
        key: "checkbox",
        name: "Checkbox",
        code: r#"bool isChecked = false;

Checkbox(
  value: isChecked,
  onChanged: (bool? value) {
    setState(() {
      isChecked = value ?? false;
    });
  },
)"#,
    },
    WidgetEntry {
        key: "switch",
        name: "Switch",
        code: r#"bool isSwitched = false;

Switch(
  value: isSwitched,
  onChanged: (bool value) {
    setState(() {
      isSwitched = value;
    });
  },
  activeColor: Colors.green,
)"#,
    },
];

const STATE_MANAGEMENT: &[WidgetEntry] = &[
    WidgetEntry {
        key: "setstate",
        name: "setState()",
        code: r#"// Basic Flutter state management
class CounterWidget extends StatefulWidget {
  @override
  _CounterWidgetState createState() => _CounterWidgetState();
}

class _CounterWidgetState extends State<CounterWidget> {
  int _counter = 0;

  void _incrementCounter() {
    setState(() {
      _counter++;
    });
  }

  @override
  Widget build(BuildContext context) {
    return Column(
      children: [
        Text('Count: $_counter'),
        ElevatedButton(
          onPressed: _incrementCounter,
          child: Text('Increment'),
        ),
      ],
    );
  }
}

// ✅ Simple for small widgets
// ❌ Rebuilds entire widget
// ❌ Hard to share state between widgets"#,
    },
    WidgetEntry {
        key: "getx",
        name: "GetX ⭐ RECOMMENDED",
        code: r#"// Add to pubspec.yaml: get: ^4.6.6

// 1. Create a Controller
class CounterController extends GetxController {
  var count = 0.obs; // Observable variable
  
  void increment() => count++;
  void decrement() => count--;
}

// 2. Use in your app
class MyApp extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    // Initialize controller
    final CounterController c = Get.put(CounterController());
    
    return Scaffold(
      body: Center(
        child: Column(
          mainAxisAlignment: MainAxisAlignment.center,
          children: [
            // Obx widget rebuilds only this part
            Obx(() => Text(
              'Count: ${c.count}',
              style: TextStyle(fontSize: 32),
            )),
            Row(
              mainAxisAlignment: MainAxisAlignment.center,
              children: [
                ElevatedButton(
                  onPressed: c.decrement,
                  child: Icon(Icons.remove),
                ),
                ElevatedButton(
                  onPressed: c.increment,
                  child: Icon(Icons.add),
                ),
              ],
            ),
          ],
        ),
      ),
    );
  }
}

// ✅ Simple syntax (.obs for reactive variables)
// ✅ Built-in navigation: Get.to(NextPage())
// ✅ Dependency injection: Get.put(), Get.find()
// ✅ Snackbars & Dialogs: Get.snackbar()
// ✅ Extremely lightweight and fast"#,
    },
    WidgetEntry {
        key: "provider",
        name: "Provider",
        code: r#"// Add to pubspec.yaml: provider: ^6.0.0

class Counter with ChangeNotifier {
  int _count = 0;
  int get count => _count;
  
  void increment() {
    _count++;
    notifyListeners();
  }
}

// Wrap app with Provider
void main() {
  runApp(
    ChangeNotifierProvider(
      create: (context) => Counter(),
      child: MyApp(),
    ),
  );
}

// Access in widget
class CounterDisplay extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return Consumer<Counter>(
      builder: (context, counter, child) {
        return Text('Count: ${counter.count}');
      },
    );
  }
}

// Update state
context.read<Counter>().increment();

// ✅ Recommended by Flutter team
// ✅ Good for medium apps
// ❌ More boilerplate than GetX"#,
    },
    WidgetEntry {
        key: "riverpod",
        name: "Riverpod",
        code: r#"// Add to pubspec.yaml: flutter_riverpod: ^2.3.0

// 1. Create a provider
final counterProvider = StateProvider<int>((ref) => 0);

// 2. Wrap app with ProviderScope
void main() {
  runApp(
    ProviderScope(
      child: MyApp(),
    ),
  );
}

// 3. Use in widget
class CounterWidget extends ConsumerWidget {
  @override
  Widget build(BuildContext context, WidgetRef ref) {
    final count = ref.watch(counterProvider);
    
    return Column(
      children: [
        Text('Count: $count'),
        ElevatedButton(
          onPressed: () {
            ref.read(counterProvider.notifier).state++;
          },
          child: Text('Increment'),
        ),
      ],
    );
  }
}

// ✅ Compile-time safe
// ✅ No BuildContext needed
// ✅ Testable without mocking
// ✅ Modern alternative to Provider"#,
    },
    WidgetEntry {
        key: "bloc",
        name: "BLoC",
        code: r#"// Add to pubspec.yaml: flutter_bloc: ^8.1.0

// 1. Define Events
abstract class CounterEvent {}
class Increment extends CounterEvent {}
class Decrement extends CounterEvent {}

// 2. Create Bloc
class CounterBloc extends Bloc<CounterEvent, int> {
  CounterBloc() : super(0) {
    on<Increment>((event, emit) => emit(state + 1));
    on<Decrement>((event, emit) => emit(state - 1));
  }
}

// 3. Use in widget
class CounterPage extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return BlocProvider(
      create: (_) => CounterBloc(),
      child: BlocBuilder<CounterBloc, int>(
        builder: (context, count) {
          return Column(
            children: [
              Text('Count: $count'),
              ElevatedButton(
                onPressed: () {
                  context.read<CounterBloc>().add(Increment());
                },
                child: Text('Increment'),
              ),
            ],
          );
        },
      ),
    );
  }
}

// ✅ Predictable event-driven
// ✅ Great for large apps
// ❌ More boilerplate code"#,
    },
];
